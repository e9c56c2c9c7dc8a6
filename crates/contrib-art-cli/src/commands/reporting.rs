use colored::Colorize;
use contrib_art_core::Plan;

/// Print the placement summary shared by `plan`, `preview`, and `paint`.
pub(crate) fn print_plan_summary(plan: &Plan) {
    println!(
        "{} '{}' ({} columns wide)",
        "Word:".cyan().bold(),
        plan.word,
        plan.word_width
    );
    println!(
        "{} {} to {} ({} weeks x {} days)",
        "Window:".cyan().bold(),
        plan.window.start(),
        plan.window.end(),
        plan.window.width(),
        plan.window.height()
    );
    println!(
        "Anchor: {}, base offset: {}, extra offset: {}, effective offset: {}.",
        plan.anchor, plan.base_left, plan.offset, plan.final_left
    );
    println!(
        "{} {} lit cells x {} = {} writes",
        "Plan:".cyan().bold(),
        plan.cells.len(),
        plan.intensity,
        plan.total_writes()
    );

    print_clip_warning(plan);
}

/// Warn on stderr when part of the word fell outside the window.
pub(crate) fn print_clip_warning(plan: &Plan) {
    if plan.clipped == 0 {
        return;
    }
    if plan.is_empty() {
        eprintln!(
            "  {} Word is entirely outside the window; nothing will be drawn",
            "!".yellow()
        );
    } else {
        eprintln!(
            "  {} {} pixel(s) fall outside the window and were clipped",
            "!".yellow(),
            plan.clipped
        );
    }
}
