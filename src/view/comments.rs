//! Interleaving of move annotations into the element stream.

use crate::domain::path::Path;
use crate::domain::tree::{CommentSide, Node};
use crate::view::context::LayoutContext;
use crate::view::element::{CommentElement, Element};

/// Comment elements of `node` for one side of its move, in stored order.
/// Empty when comments are toggled off.
pub(crate) fn comments_of(
    ctx: &LayoutContext,
    node: &Node,
    path: &Path,
    side: CommentSide,
) -> Vec<Element> {
    if !ctx.show_comments {
        return Vec::new();
    }
    node.comments
        .iter()
        .filter(|c| c.side == side)
        .map(|c| {
            Element::Comment(CommentElement {
                path: path.clone(),
                text: c.text.clone(),
                side: c.side,
            })
        })
        .collect()
}

/// Root comments lead the whole layout, in stored order regardless of side.
pub(crate) fn root_comments(ctx: &LayoutContext, root: &Node) -> Vec<Element> {
    if !ctx.show_comments {
        return Vec::new();
    }
    root.comments
        .iter()
        .map(|c| {
            Element::Comment(CommentElement {
                path: Path::root(),
                text: c.text.clone(),
                side: c.side,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tree::Comment;

    #[test]
    fn test_comments_filtered_by_side() {
        let node = Node::new('a', 1, "e4")
            .with_comment(Comment::before("prep"))
            .with_comment(Comment::after("book"))
            .with_comment(Comment::after("sharp"));
        let ctx = LayoutContext::new(Path::root());
        let path = Path::from("a");

        let before = comments_of(&ctx, &node, &path, CommentSide::Before);
        assert_eq!(before.len(), 1);

        let after = comments_of(&ctx, &node, &path, CommentSide::After);
        let texts: Vec<_> = after
            .iter()
            .map(|e| match e {
                Element::Comment(c) => c.text.as_str(),
                _ => panic!("expected comment"),
            })
            .collect();
        assert_eq!(texts, vec!["book", "sharp"]);
    }

    #[test]
    fn test_comments_suppressed_when_toggled_off() {
        let node = Node::new('a', 1, "e4").with_comment(Comment::after("book"));
        let ctx = LayoutContext {
            show_comments: false,
            ..LayoutContext::new(Path::root())
        };
        assert!(comments_of(&ctx, &node, &Path::from("a"), CommentSide::After).is_empty());
        assert!(root_comments(&ctx, &node).is_empty());
    }
}
