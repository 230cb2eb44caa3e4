use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> String {
    let version = env!("CARGO_PKG_VERSION");
    let scored = ctx.scores.iter().filter(|s| s.error.is_none()).count();
    let errors = ctx.scores.len() - scored;

    let mut out = String::new();
    out.push_str(&format!("corescore v{}\n", version));
    out.push_str(&format!(
        "Input: {} ({} cases, {} excluded)\n",
        ctx.input.display(),
        ctx.scores.len(),
        ctx.excluded.len()
    ));
    out.push_str(&format!("Scored: {} ok, {} errors\n", scored, errors));

    let flagged: Vec<&str> = ctx
        .scores
        .iter()
        .filter(|s| !s.note.is_empty())
        .map(|s| s.case_id.as_str())
        .collect();
    if flagged.is_empty() {
        out.push_str("Flags: none\n");
    } else {
        out.push_str(&format!("Flags: {}\n", flagged.join(", ")));
    }

    out.push_str(&format!("Scores: {}\n", ctx.output.tsv_path.display()));
    out
}
