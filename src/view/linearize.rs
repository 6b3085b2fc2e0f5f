//! The linearization engine.
//!
//! Walks the move tree under a [`LayoutContext`] and produces the flat,
//! ordered display-element sequence: the mainline spine, inline branches for
//! simple two-way forks, boxed lines (wrapped in an interrupt on the spine)
//! for everything else, and truncation markers where an off-path computer
//! variation runs past its budget. Pure over its inputs: identical tree and
//! context always produce an identical element sequence.

use tracing::trace;

use crate::domain::path::Path;
use crate::domain::tree::{CommentSide, MoveTree, Node, TreeError};
use crate::view::comments::{comments_of, root_comments};
use crate::view::context::LayoutContext;
use crate::view::element::{Element, MoveElement, NOTATION_PLACEHOLDER};

/// Plies of lookahead granted to the inline-merge branching probe.
const INLINE_DEPTH: u32 = 6;

/// Moves shown of an off-path computer variation before it is cut.
const COMP_TRUNCATE: u8 = 3;

/// Per-call traversal state: where we are, whether we are still on the
/// mainline spine, the remaining truncation budget, and an inline-merge
/// companion supplied by the caller.
struct Opts<'a> {
    parent_path: Path,
    is_mainline: bool,
    truncate: Option<u8>,
    inline: Option<&'a Node>,
}

/// Linearize the whole tree into display elements.
///
/// Validates the tree first; a malformed tree (duplicate sibling ids) is
/// fatal and produces no partial layout.
pub fn linearize(tree: &MoveTree, ctx: &LayoutContext) -> Result<Vec<Element>, TreeError> {
    tree.validate()?;
    trace!(current = %ctx.current_path, "linearize");
    let mut out = root_comments(ctx, &tree.root);
    out.extend(render_children_of(
        ctx,
        &tree.root,
        Opts {
            parent_path: Path::root(),
            is_mainline: true,
            truncate: None,
            inline: None,
        },
    ));
    Ok(out)
}

fn render_children_of(ctx: &LayoutContext, node: &Node, opts: Opts<'_>) -> Vec<Element> {
    let cs = &node.children;
    let Some(main) = cs.first() else {
        return Vec::new();
    };
    if opts.is_mainline {
        if cs.len() == 1 && !main.force_variation {
            return render_move_and_children_of(
                ctx,
                main,
                Opts {
                    parent_path: opts.parent_path,
                    is_mainline: true,
                    truncate: None,
                    inline: None,
                },
            );
        }
        if let Some(inlined) = render_inlined(ctx, cs, &opts) {
            return inlined;
        }
        let main_path = opts.parent_path.append(main.id);
        let mut out = Vec::new();
        if !main.force_variation {
            out.extend(comments_of(ctx, main, &main_path, CommentSide::Before));
            out.push(render_move_of(ctx, main, &main_path));
            out.extend(comments_of(ctx, main, &main_path, CommentSide::After));
        }
        let forks = if main.force_variation { &cs[..] } else { &cs[1..] };
        out.push(Element::Interrupt(render_lines(ctx, forks, &opts.parent_path)));
        if !main.force_variation {
            out.extend(render_children_of(
                ctx,
                main,
                Opts {
                    parent_path: main_path,
                    is_mainline: true,
                    truncate: None,
                    inline: None,
                },
            ));
        }
        return out;
    }
    if cs.len() == 1 {
        return render_move_and_children_of(ctx, main, Opts { inline: None, ..opts });
    }
    if let Some(inlined) = render_inlined(ctx, cs, &opts) {
        return inlined;
    }
    render_lines(ctx, cs, &opts.parent_path)
}

/// A two-way fork whose second branch stays fork-free within the probe
/// depth collapses into the first child's stream, with the alternative
/// attached as an inline branch right after the first child's move.
fn render_inlined(ctx: &LayoutContext, nodes: &[Node], opts: &Opts<'_>) -> Option<Vec<Element>> {
    let [first, second] = nodes else {
        return None;
    };
    if first.force_variation || second.has_branching(INLINE_DEPTH) {
        return None;
    }
    Some(render_move_and_children_of(
        ctx,
        first,
        Opts {
            parent_path: opts.parent_path.clone(),
            is_mainline: opts.is_mainline,
            truncate: None,
            inline: Some(second),
        },
    ))
}

/// One boxed line per side branch, in child order. A branch that heads an
/// off-path computer variation starts with a truncation budget; the line
/// holding the currently viewed node never does.
fn render_lines(ctx: &LayoutContext, nodes: &[Node], parent_path: &Path) -> Vec<Element> {
    nodes
        .iter()
        .map(|n| {
            let path = parent_path.append(n.id);
            if let Some(retro) = ctx.retro.as_ref().filter(|r| r.path == path) {
                return retro.line.clone();
            }
            let truncate = if n.computer && !ctx.current_path.contains(&path) {
                Some(COMP_TRUNCATE)
            } else {
                None
            };
            Element::Line(render_move_and_children_of(
                ctx,
                n,
                Opts {
                    parent_path: parent_path.clone(),
                    is_mainline: false,
                    truncate,
                    inline: None,
                },
            ))
        })
        .collect()
}

fn render_move_and_children_of(ctx: &LayoutContext, node: &Node, opts: Opts<'_>) -> Vec<Element> {
    let path = opts.parent_path.append(node.id);
    if opts.truncate == Some(0) {
        trace!(%path, "truncation budget exhausted");
        return vec![Element::Truncated(path)];
    }
    let mut out = comments_of(ctx, node, &path, CommentSide::Before);
    out.push(render_move_of(ctx, node, &path));
    out.extend(comments_of(ctx, node, &path, CommentSide::After));
    if let Some(inline) = opts.inline {
        out.push(Element::Inline(render_move_and_children_of(
            ctx,
            inline,
            Opts {
                parent_path: opts.parent_path.clone(),
                is_mainline: false,
                truncate: None,
                inline: None,
            },
        )));
    }
    out.extend(render_children_of(
        ctx,
        node,
        Opts {
            parent_path: path,
            is_mainline: opts.is_mainline,
            truncate: opts.truncate.map(|t| t - 1),
            inline: None,
        },
    ));
    out
}

fn render_move_of(ctx: &LayoutContext, node: &Node, path: &Path) -> Element {
    Element::Move(MoveElement {
        path: path.clone(),
        ply: node.ply,
        text: node
            .san
            .clone()
            .unwrap_or_else(|| NOTATION_PLACEHOLDER.to_owned()),
        glyphs: if ctx.show_glyphs {
            node.glyphs.clone()
        } else {
            Vec::new()
        },
        active: *path == ctx.current_path,
        computer: node.computer,
    })
}
