use colored::*;
use itertools::Itertools;

use crate::runner::{Runner, StatusClass};
use crate::runner_group::RunnerGroup;

pub const GLYPH: &str = "●";

pub const RUNNERS_HEADER: &str = "Runners";
pub const STATUS_HEADER: &str = "Status";
pub const ID_HEADER: &str = "ID";
pub const NAME_HEADER: &str = "Name";
pub const VISIBILITY_HEADER: &str = "Visibility";

/// Color used for each kind of status cell.
///
/// Orange is rendered as the terminal's yellow.
fn runner_color(class: StatusClass) -> Color {
    match class {
        StatusClass::Active => Color::Yellow,
        StatusClass::Idle => Color::Green,
        StatusClass::Offline => Color::White,
    }
}

fn runner_label(class: StatusClass) -> &'static str {
    match class {
        StatusClass::Active => "Active",
        StatusClass::Idle => "Idle",
        StatusClass::Offline => "Offline",
    }
}

fn group_color(group: &RunnerGroup) -> Color {
    if group.default {
        Color::Green
    } else if group.visibility == "private" {
        Color::White
    } else {
        Color::Yellow
    }
}

fn group_label(group: &RunnerGroup) -> String {
    if group.default {
        format!("{} (default)", group.visibility)
    } else {
        group.visibility.clone()
    }
}

fn annotate(label: &str, color: Color) -> ColoredString {
    format!("{} {}", GLYPH, label).color(color)
}

pub fn runner_status(runner: &Runner) -> ColoredString {
    let class = runner.status_class();
    annotate(runner_label(class), runner_color(class))
}

pub fn runner_group_status(group: &RunnerGroup) -> ColoredString {
    annotate(&group_label(group), group_color(group))
}

fn max_name_len<'a>(header: &str, names: impl Iterator<Item = &'a str>) -> usize {
    names.map(str::len).fold(header.len(), usize::max)
}

pub fn max_runner_name_len(runners: &[Runner]) -> usize {
    max_name_len(RUNNERS_HEADER, runners.iter().map(|r| r.name.as_str()))
}

pub fn max_runner_group_name_len(groups: &[RunnerGroup]) -> usize {
    max_name_len(NAME_HEADER, groups.iter().map(|g| g.name.as_str()))
}

// Pads with spaces to `width` bytes, leaving longer strings untouched.
fn pad(s: &str, width: usize) -> String {
    let mut padded = s.to_string();
    padded.push_str(&" ".repeat(width.saturating_sub(s.len())));
    padded
}

pub fn format_runners_header(name_width: usize) -> String {
    format!("{}  {}", pad(RUNNERS_HEADER, name_width), STATUS_HEADER)
}

pub fn format_runner_row(runner: &Runner, name_width: usize) -> String {
    format!("{}  {}", pad(&runner.name, name_width), runner_status(runner))
}

pub fn format_runner_groups_header(name_width: usize) -> String {
    format!(
        "{}\t{}  {}",
        ID_HEADER,
        pad(NAME_HEADER, name_width),
        VISIBILITY_HEADER
    )
}

pub fn format_runner_group_row(group: &RunnerGroup, name_width: usize) -> String {
    format!(
        "{}\t{}  {}",
        group.id,
        pad(&group.name, name_width),
        runner_group_status(group)
    )
}

/// Renders the whole group table. No groups means no output, not even a header.
pub fn format_runner_groups(groups: &[RunnerGroup]) -> String {
    if groups.is_empty() {
        return String::new();
    }

    let width = max_runner_group_name_len(groups);
    std::iter::once(format_runner_groups_header(width))
        .chain(groups.iter().map(|g| format_runner_group_row(g, width)))
        .join("\n")
}
