use crate::cards::Category;
use crate::deduction::Holder;
use crate::deduction::Mark;
use crate::deduction::Notebook;
use crate::deduction::Summary;
use colored::Colorize;

/// Card names of one category, flagged relative to `viewpoint`.
pub fn cards(notebook: &Notebook, viewpoint: Holder, category: Category) -> anyhow::Result<Vec<String>> {
    Ok(notebook
        .marks(viewpoint, category)?
        .into_iter()
        .map(|(card, mark)| {
            let name = notebook.registry().name(card);
            match mark {
                Mark::Mine => format!("{} {}", name, "(yours)".green()),
                Mark::Elsewhere => format!("{} {}", name, "(known)".dimmed()),
                Mark::Unknown => name.to_string(),
            }
        })
        .collect())
}

pub fn summary(s: &Summary) -> String {
    let mut out = format!("{}\n", s.name.blue().bold());
    out.push_str(&format!("{}\n", "Known cards:".green()));
    let placeholders = s.capacity.saturating_sub(s.known.len());
    let slots = s
        .known
        .iter()
        .map(String::as_str)
        .chain(std::iter::repeat_n("Unknown", placeholders))
        .enumerate()
        .map(|(i, c)| format!("{}. {}", i + 1, c))
        .collect::<Vec<_>>();
    out.push_str(&slots.join("\t"));
    out.push('\n');
    if !s.solved && !s.ruled.is_empty() {
        out.push_str(&format!("{}\n", "Cards not owned:".red()));
        let ruled = s
            .ruled
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}. {}", i + 1, c))
            .collect::<Vec<_>>();
        out.push_str(&ruled.join("\t"));
        out.push('\n');
    }
    if !s.pending.is_empty() {
        out.push_str(&format!("{}\n", "Other information:".yellow()));
        for (i, set) in s.pending.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, set.join(" or ")));
        }
    }
    out
}

pub fn status(notebook: &Notebook) -> String {
    let report = notebook.report();
    let rule = "-".repeat(48);
    report
        .envelope()
        .into_iter()
        .chain(report.entities.iter().filter(|s| !s.holder.is_envelope()))
        .map(|s| format!("{}\n{}", rule, summary(s)))
        .collect::<Vec<_>>()
        .join("\n")
}
