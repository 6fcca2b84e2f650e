use iced::widget::{button, column, container, row, text, text_input, tooltip, Column};
use iced::{Alignment, Element, Length, Task, Theme};

mod config;
mod dataset;
mod error;
mod session;
mod state;
mod ui;

use config::Config;
use dataset::DigitDataset;
use error::{LabelerError, Result};
use session::LabelingSession;
use state::agreement::AgreementReport;
use state::data::LabelEntry;
use state::store::LabelStore;
use ui::DigitRaster;

/// Main application state
struct LabelingApp {
    /// The label database
    store: LabelStore,
    /// Dataset plus the image on screen
    session: LabelingSession,
    /// Canvas for the current image
    digit: DigitRaster,
    /// Text typed into the "Label" field
    label: String,
    /// Every stored entry, refreshed once per cycle
    entries: Vec<LabelEntry>,
    /// Agreement over `entries`, absent while the store is empty
    report: Option<AgreementReport>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User edited the "Label" field
    LabelChanged(String),
    /// User clicked "Submit" or pressed Enter in the label field
    Submit,
}

impl LabelingApp {
    /// Open the store, load the dataset and start the first cycle.
    /// Any failure here is fatal: the form cannot work without its store.
    fn new(config: Config) -> Result<Self> {
        let store = LabelStore::open(&config.db_path)?;
        let dataset = DigitDataset::load()?;
        let session = LabelingSession::new(dataset);
        let digit = DigitRaster::new(session.current().clone());

        let mut app = LabelingApp {
            store,
            session,
            digit,
            label: String::new(),
            entries: Vec::new(),
            report: None,
            status: String::new(),
        };
        app.refresh_entries()?;
        app.status = format!("Ready. {} labels stored.", app.entries.len());

        log::info!(
            "🎨 Digit labeler initialized with {} images, {} labels in {}",
            app.session.dataset().size(),
            app.store.entry_count()?,
            app.store.path().display()
        );

        Ok(app)
    }

    /// Reload every row and recompute the metric
    fn refresh_entries(&mut self) -> Result<()> {
        self.entries = self.store.all_entries()?;
        self.report = AgreementReport::from_entries(&self.entries);
        Ok(())
    }

    /// Start a new cycle: fresh image, cleared form, reloaded table
    fn next_cycle(&mut self) {
        let record = self.session.pick_image().clone();
        self.digit.show(record);
        self.label.clear();

        if let Err(e) = self.refresh_entries() {
            log::error!("⚠️  Failed to reload labels: {}", e);
            self.status = format!("⚠️  Could not reload labels: {}", e);
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LabelChanged(label) => {
                self.label = label;
            }
            Message::Submit => match self.session.on_submit(&self.store, &self.label) {
                Ok(entry) => {
                    self.status = format!("✅ Saved {:?} for image {}", entry.label, entry.image);
                    self.next_cycle();
                }
                Err(e) => {
                    // Keep the image and the typed label so the user can retry
                    log::error!("⚠️  Failed to store label: {}", e);
                    self.status = format!("⚠️  Could not save label: {}", e);
                }
            },
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let image_value = self
            .digit
            .record()
            .map(|r| r.ground_truth_value())
            .unwrap_or_default();

        let form: Column<Message> = column![
            iced::widget::canvas(&self.digit)
                .width(Length::Fixed(200.0))
                .height(Length::Fixed(200.0)),
            text("Image").size(14),
            tooltip(
                // No on_input: the field is read-only
                text_input("", &image_value),
                text("Filename of the image to label"),
                tooltip::Position::Bottom,
            ),
            text("Label").size(14),
            tooltip(
                text_input("", &self.label)
                    .on_input(Message::LabelChanged)
                    .on_submit(Message::Submit),
                text("What digit does this image represent?"),
                tooltip::Position::Bottom,
            ),
            button("Submit").on_press(Message::Submit).padding(10),
        ]
        .spacing(10)
        .width(Length::Fixed(240.0));

        let content = column![
            text("Data labeling with SQLite and iced").size(32),
            row![
                form,
                ui::table::entries_table(&self.entries),
                ui::table::agreement_metric(self.report.as_ref()),
            ]
            .spacing(40),
            text(&self.status).size(14),
        ]
        .spacing(20)
        .padding(30)
        .align_x(Alignment::Start);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> std::result::Result<(), LabelerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let app = LabelingApp::new(config)?;

    iced::application("Digit Labeler", LabelingApp::update, LabelingApp::view)
        .theme(LabelingApp::theme)
        .centered()
        .run_with(move || (app, Task::none()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_in(dir: &tempfile::TempDir) -> LabelingApp {
        let config = Config {
            db_path: dir.path().join("labels.db"),
        };
        LabelingApp::new(config).unwrap()
    }

    #[test]
    fn test_fresh_store_has_no_metric() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(&dir);
        assert!(app.entries.is_empty());
        assert!(app.report.is_none());
    }

    #[test]
    fn test_submit_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        let truth = app.session.current().ground_truth_value();
        let _ = app.update(Message::LabelChanged(truth.clone()));
        let _ = app.update(Message::Submit);

        assert!(app.label.is_empty());
        assert_eq!(app.entries, vec![LabelEntry::new(truth.clone(), truth)]);
        assert_eq!(app.report.as_ref().map(|r| r.percent()), Some("100.0%".to_string()));
        assert_eq!(
            app.digit.record().map(|r| r.id),
            Some(app.session.current().id)
        );
    }

    #[test]
    fn test_empty_label_is_stored() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        let _ = app.update(Message::Submit);

        assert_eq!(app.entries.len(), 1);
        assert_eq!(app.entries[0].label, "");
        assert_eq!(app.report.as_ref().map(|r| r.percent()), Some("0.0%".to_string()));
    }
}
