//! Scripted front end: render, then apply each action and render again.

use anyhow::Result;
use core_actions::Paginator;
use core_events::{PageEvent, PaginationHooks};
use core_render::Renderer;
use tracing::debug;

/// Parse one positional action: `next`/`n`, `prev`/`p` or a page number.
pub fn parse_action(s: &str) -> Result<PageEvent, String> {
    match s {
        "next" | "n" => Ok(PageEvent::Next),
        "prev" | "p" => Ok(PageEvent::Prev),
        other => other
            .parse::<usize>()
            .map(PageEvent::Click)
            .map_err(|_| format!("expected `next`, `prev` or a page number, got `{other}`")),
    }
}

pub fn run<H, R>(
    paginator: &mut Paginator<H>,
    actions: &[PageEvent],
    renderer: &mut R,
) -> Result<()>
where
    H: PaginationHooks,
    R: Renderer,
{
    renderer.render(paginator.plan())?;
    for &event in actions {
        let transition = paginator.dispatch(event);
        debug!(
            target: "runtime.script",
            ?transition,
            committed = transition.is_committed(),
            "action_applied"
        );
        renderer.render(paginator.plan())?;
    }
    Ok(())
}
