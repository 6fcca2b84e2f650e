use iced::widget::{column, container, row, scrollable, text, Column};
use iced::{Element, Length};

use crate::state::agreement::AgreementReport;
use crate::state::data::LabelEntry;
use crate::Message;

const INDEX_WIDTH: f32 = 48.0;
const CELL_WIDTH: f32 = 120.0;

/// Table of every stored entry, in store order
pub fn entries_table(entries: &[LabelEntry]) -> Element<'_, Message> {
    let header = row![
        text("#").width(Length::Fixed(INDEX_WIDTH)),
        text("image").width(Length::Fixed(CELL_WIDTH)),
        text("label").width(Length::Fixed(CELL_WIDTH)),
    ]
    .spacing(8);

    let rows = entries.iter().enumerate().fold(
        Column::new().spacing(4),
        |rows, (index, entry)| {
            rows.push(
                row![
                    text(index.to_string()).width(Length::Fixed(INDEX_WIDTH)),
                    text(&entry.image).width(Length::Fixed(CELL_WIDTH)),
                    text(&entry.label).width(Length::Fixed(CELL_WIDTH)),
                ]
                .spacing(8),
            )
        },
    );

    column![
        header,
        scrollable(rows).height(Length::Fill),
        text(format!("{} rows", entries.len())).size(12),
    ]
    .spacing(8)
    .into()
}

/// Agreement metric, or nothing at all for an empty store
pub fn agreement_metric(report: Option<&AgreementReport>) -> Element<'_, Message> {
    match report {
        Some(report) => container(
            column![
                text("Agreement").size(16),
                text(report.percent()).size(40),
                text(format!("{} of {} labels match", report.matches, report.total)).size(12),
            ]
            .spacing(4),
        )
        .into(),
        None => column![].into(),
    }
}
