//! Terminal commands
//!
//! One command per stdin line, mapped onto the page's UI events.

use skillswap_types::{ListingId, SkillswapError, UiEvent};

pub const HELP: &str = "\
Commands:
  search <text>     filter by text (empty clears)
  category <name>   all | technology | music | languages | sports | arts
  save <id>         toggle saved on a listing
  swap <id>         request a swap
  get-started       open registration
  join              open registration
  close             close the overlay
  backdrop          click outside the overlay
  submit            submit the overlay form
  toggle            switch login/registration
  email <text>      type into the newsletter box
  subscribe         submit the newsletter box
  show              print the current frame
  help              print this help
  quit              exit";

/// A parsed terminal line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(UiEvent),
    Show,
    Help,
    Quit,
}

fn listing_id(line: &str, arg: &str) -> Result<ListingId, SkillswapError> {
    arg.parse()
        .map_err(|_| SkillswapError::UnknownCommand(format!("{} (expected a listing id)", line)))
}

/// Parse one line. Blank lines yield `None`.
///
/// Only the separator after the command name is consumed; the rest of the
/// line is the argument as typed, spaces included.
pub fn parse(line: &str) -> Result<Option<Command>, SkillswapError> {
    let line = line.trim_start().trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg),
        None => (line, ""),
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "search" => Command::Event(UiEvent::SearchChanged(arg.to_string())),
        "category" => Command::Event(UiEvent::CategoryChanged(arg.to_string())),
        "save" => Command::Event(UiEvent::SaveClicked(listing_id(line, arg)?)),
        "swap" => Command::Event(UiEvent::SwapClicked(listing_id(line, arg)?)),
        "get-started" => Command::Event(UiEvent::GetStarted),
        "join" => Command::Event(UiEvent::JoinNow),
        "close" => Command::Event(UiEvent::OverlayClose),
        "backdrop" => Command::Event(UiEvent::OverlayBackdrop),
        "submit" => Command::Event(UiEvent::AuthSubmit),
        "toggle" => Command::Event(UiEvent::AuthToggle),
        "email" => Command::Event(UiEvent::NewsletterInput(arg.to_string())),
        "subscribe" => Command::Event(UiEvent::NewsletterSubmit),
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(SkillswapError::UnknownCommand(line.to_string())),
    };

    Ok(Some(command))
}
