use directory_core::{
    CandidateRowView, DirectoryViewModel, LoadStatus, SortConfig, SortDirection, SortKey,
};
use directory_engine::detail_url;

use super::constants::*;

/// Values shown alongside the view model that the core does not track.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub base_url: String,
    pub last_loaded: Option<String>,
}

pub fn render(view: &DirectoryViewModel, ctx: &RenderContext) -> Vec<String> {
    let mut lines = vec![TITLE.to_string(), status_line(view), load_line(view, ctx)];
    lines.push(String::new());
    lines.extend(render_table(view));

    if let Some(detail) = &view.detail {
        let url = detail_url(&ctx.base_url, &detail.id).unwrap_or_else(|_| detail.path.clone());
        lines.push(String::new());
        lines.push(format!("Detail: {}", detail.title));
        lines.push(format!("  {url}"));
        lines.push("  (`close` to dismiss)".to_string());
    }

    lines
}

pub fn render_jobs(view: &DirectoryViewModel) -> Vec<String> {
    if view.job_options.is_empty() {
        return vec!["No job titles loaded.".to_string()];
    }
    let mut lines = vec![format!("{ALL_JOBS} (job all)")];
    for job in &view.job_options {
        let marker = if *job == view.profession_filter { "*" } else { " " };
        lines.push(format!("{marker} {job}"));
    }
    lines
}

fn status_line(view: &DirectoryViewModel) -> String {
    let job = if view.profession_filter.is_empty() {
        ALL_JOBS.to_string()
    } else {
        view.profession_filter.clone()
    };
    let mut parts = vec![
        format!("Candidates: {} / {}", view.shown_count, view.total_count),
        format!("Job: {job}"),
    ];
    if !view.search_query.is_empty() {
        parts.push(format!("Search: \"{}\"", view.search_query));
    }
    if let Some(sort) = view.sort {
        parts.push(format!(
            "Sort: {} {}",
            column_label(sort.key),
            direction_arrow(sort.direction)
        ));
    }
    parts.join(" | ")
}

fn load_line(view: &DirectoryViewModel, ctx: &RenderContext) -> String {
    let mut line = format!(
        "Candidates list: {} | Jobs list: {}",
        status_label(view.candidates_status),
        status_label(view.jobs_status)
    );
    if let Some(at) = &ctx.last_loaded {
        line.push_str(&format!(" | Last load: {at}"));
    }
    line
}

fn status_label(status: LoadStatus) -> &'static str {
    match status {
        LoadStatus::NotLoaded => "not loaded",
        LoadStatus::Loading => "loading",
        LoadStatus::Loaded => "loaded",
        LoadStatus::Failed => "unavailable",
    }
}

fn column_label(key: SortKey) -> &'static str {
    match key {
        SortKey::FullName => HEADER_NAME,
        SortKey::PrimaryProfession => HEADER_JOB,
        SortKey::Skills => HEADER_SKILLS,
    }
}

fn direction_arrow(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

fn header(key: SortKey, sort: Option<SortConfig>) -> String {
    match sort {
        Some(active) if active.key == key => {
            format!("{} {}", column_label(key), direction_arrow(active.direction))
        }
        _ => column_label(key).to_string(),
    }
}

fn render_table(view: &DirectoryViewModel) -> Vec<String> {
    if view.rows.is_empty() {
        return vec![EMPTY_TABLE.to_string()];
    }

    let headers = [
        HEADER_ROW.to_string(),
        header(SortKey::FullName, view.sort),
        header(SortKey::PrimaryProfession, view.sort),
        header(SortKey::Skills, view.sort),
    ];
    let cells: Vec<[String; 4]> = view
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| row_cells(index + 1, row))
        .collect();

    let mut widths = headers.each_ref().map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(format_row(&headers, &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    lines.extend(cells.iter().map(|row| format_row(row, &widths)));
    lines
}

fn row_cells(number: usize, row: &CandidateRowView) -> [String; 4] {
    [
        number.to_string(),
        truncate(&row.full_name),
        truncate(&row.primary_profession),
        truncate(&row.skills),
    ]
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_CELL_WIDTH {
        return text.to_string();
    }
    let kept: String = text.chars().take(MAX_CELL_WIDTH - 3).collect();
    format!("{kept}...")
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width - cell.chars().count();
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
