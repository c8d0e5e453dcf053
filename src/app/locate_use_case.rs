use crate::apis::locatieserver::LocatieserverClient;
use crate::app::ports::ConsolePort;
use crate::app::select::{choose, classify, Selection};
use crate::error::Result;
use crate::storage::AddressBook;
use crate::types::AddressRecord;
use std::path::PathBuf;
use tracing::info;

const RESTART_HINT: &str = "You can restart the tool to search again.";

#[derive(Debug)]
pub enum LocateOutcome {
    NoResults,
    Cancelled,
    Saved {
        path: PathBuf,
        record: AddressRecord,
    },
}

/// One interactive run: search, pick, look up, describe, append.
pub struct LocateUseCase {
    client: LocatieserverClient,
    book: AddressBook,
}

impl LocateUseCase {
    pub fn new(client: LocatieserverClient, book: AddressBook) -> Self {
        Self { client, book }
    }

    pub async fn run(&self, console: &mut dyn ConsolePort) -> Result<LocateOutcome> {
        let fragment =
            console.prompt("Please enter (a part of) the address you are looking for")?;

        let suggestions = self.client.suggest(&fragment).await?;
        let service_id = match classify(&suggestions)? {
            Selection::NoResults => {
                console.say(&format!("No results found. ({RESTART_HINT})"));
                return Ok(LocateOutcome::NoResults);
            }
            Selection::Single(candidate) => {
                console.say("A single address was found:");
                console.say(&candidate.display_name);
                candidate.service_id.clone()
            }
            Selection::Choose(candidates) => match choose(console, candidates)? {
                Some(index) => {
                    let candidate = &candidates[index];
                    console.say("You have chosen the following address:");
                    console.say(&candidate.display_name);
                    candidate.service_id.clone()
                }
                None => {
                    info!("selection cancelled");
                    console.say("");
                    console.say(RESTART_HINT);
                    return Ok(LocateOutcome::Cancelled);
                }
            },
        };

        let mut record = self.client.lookup(&service_id).await?;

        console.say("");
        record.description = console.prompt(
            "Optionally: add a description to the address (press enter to leave it blank)",
        )?;

        let path = self.book.append(&record)?;
        info!(path = %path.display(), "address saved");

        console.say("");
        console.say(
            "The address details (including x and y coordinates) have been written to the following file:",
        );
        console.say(&path.display().to_string());
        console.say("");
        console.say(RESTART_HINT);

        Ok(LocateOutcome::Saved { path, record })
    }
}
