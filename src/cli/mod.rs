//! Interactive front end: collects the table, then turns menu choices into
//! moves on a [`Ledger`].
pub mod args;
pub mod prompt;
pub mod render;

pub use args::Args;

use crate::cards::Card;
use crate::cards::Catalog;
use crate::cards::Category;
use crate::cards::Suggestion;
use crate::deduction::Holder;
use crate::ledger::Ledger;
use crate::ledger::Move;
use crate::ledger::Transcript;
use crate::setup::Seat;
use crate::setup::Setup;
use crate::Error;
use crate::MAX_PLAYERS;
use crate::MIN_PLAYERS;
use colored::Colorize;
use std::path::PathBuf;

const MENU: [&str; 5] = [
    "Make a suggestion",
    "Add a known card",
    "View current status",
    "Undo a move",
    "Exit",
];

pub struct Assistant {
    ledger: Ledger,
    transcript: Option<PathBuf>,
}

impl Assistant {
    /// Resume the transcript if there is one, otherwise ask for the table.
    pub fn new(args: &Args) -> anyhow::Result<Self> {
        let transcript = args.transcript.clone();
        if let Some(path) = transcript.as_ref().filter(|p| p.exists()) {
            log::info!("resuming {}", path.display());
            let ledger = Ledger::try_from(Transcript::load(path)?)?;
            println!("Resumed {} moves from {}", ledger.moves().len(), path.display());
            return Ok(Self { ledger, transcript });
        }
        let catalog = match args.catalog.as_ref() {
            Some(path) => serde_json::from_reader(std::fs::File::open(path)?)?,
            None => Catalog::classic(),
        };
        let mut assistant = Self {
            ledger: Ledger::new(Self::table(catalog)?)?,
            transcript,
        };
        assistant.opening()?;
        Ok(assistant)
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match prompt::choose("Main menu", &MENU)? {
                0 => self.suggestion()?,
                1 => self.learned()?,
                2 => println!("{}", render::status(self.ledger.notebook())),
                3 => self.undo()?,
                _ => return Ok(()),
            }
        }
    }

    /// Names and hand sizes, asking for sizes only while the deal is uneven.
    fn table(catalog: Catalog) -> anyhow::Result<Setup> {
        let players = prompt::number("How many players will be playing?", MIN_PLAYERS, MAX_PLAYERS)?;
        let (base, mut extra) = Setup::hand_sizes(catalog.len(), players)?;
        let mut seats = Vec::with_capacity(players);
        for seat in 0..players {
            let name = match seat {
                0 => prompt::text("Enter your name")?,
                _ => prompt::text("Enter the name of the next player (to the left)")?,
            };
            let left = players - seat;
            let cards = match extra {
                0 => base,
                e if e == left => base + 1,
                _ => prompt::number(&format!("How many cards does {} have?", name), base, base + 1)?,
            };
            extra -= cards - base;
            println!("Player {}: {}\tCards: {}", seat + 1, name, cards);
            seats.push(Seat::new(name, cards));
        }
        Ok(Setup::new(catalog, seats)?)
    }

    fn opening(&mut self) -> anyhow::Result<()> {
        let capacity = self.ledger.setup().seats[0].cards;
        let mut held = self
            .ledger
            .notebook()
            .knowledge(Holder::OPERATOR)?
            .known()
            .size();
        while held < capacity {
            let card = self.card("Please select a card you have", Holder::OPERATOR)?;
            if self.commit(Move::StartCard(card))? {
                held += 1;
            }
        }
        Ok(())
    }

    fn suggestion(&mut self) -> anyhow::Result<()> {
        let names = self.names();
        let suggester = prompt::choose("Which player will make a suggestion?", &names)?;
        let room = self.pick("Where did the murder occur?", Category::Room)?;
        let suspect = self.pick("Who did it?", Category::Suspect)?;
        let weapon = self.pick("What weapon did they use?", Category::Weapon)?;
        let mut answers = names;
        answers[suggester] = "Nobody".to_string();
        let resolver = prompt::choose("Which player was able to disprove the suggestion?", &answers)?;
        let suggestion = Suggestion::new(self.ledger.notebook().registry(), room, suspect, weapon)?;
        self.commit(Move::Suggestion {
            suggester,
            suggestion,
            resolver: Some(resolver).filter(|r| *r != suggester),
        })?;
        Ok(())
    }

    fn learned(&mut self) -> anyhow::Result<()> {
        let holders = self.ledger.notebook().holders().collect::<Vec<_>>();
        let labels = holders
            .iter()
            .map(|h| self.ledger.notebook().label(*h).to_string())
            .collect::<Vec<_>>();
        let holder = holders[prompt::choose("Whose card was learned?", &labels)?];
        let question = format!("Please select which card {} has", self.ledger.notebook().label(holder));
        let card = self.card(&question, Holder::OPERATOR)?;
        if self.commit(Move::LearnedCard { card, holder })? {
            println!("The card was successfully added");
        }
        Ok(())
    }

    fn undo(&mut self) -> anyhow::Result<()> {
        let mut moves = self.ledger.describe();
        if moves.is_empty() {
            println!("Nothing to undo");
            return Ok(());
        }
        moves.push("Cancel".to_string());
        let index = prompt::choose("Which move should be undone?", &moves)?;
        if index + 1 < moves.len() {
            self.commit(Move::Undo(index))?;
        }
        Ok(())
    }

    /// Record a move. Rejections are shown and reported as `false`; only
    /// I/O failures on the transcript are errors.
    fn commit(&mut self, mv: Move) -> anyhow::Result<bool> {
        match self.ledger.record(mv) {
            Ok(()) => {
                if let Some(path) = self.transcript.as_ref() {
                    Transcript::from(&self.ledger).save(path)?;
                }
                Ok(true)
            }
            Err(e @ (Error::AlreadyKnown { .. }
            | Error::RuledOut { .. }
            | Error::InvalidUndoTarget { .. }
            | Error::Category { .. })) => {
                println!("{}", e.to_string().red());
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn names(&self) -> Vec<String> {
        self.ledger
            .notebook()
            .names()
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn pick(&self, prompt: &str, category: Category) -> anyhow::Result<Card> {
        let notebook = self.ledger.notebook();
        let items = render::cards(notebook, Holder::OPERATOR, category)?;
        let n = prompt::choose(prompt, &items)?;
        Ok(notebook
            .registry()
            .nth(category, n)
            .ok_or(Error::UnknownCard(items[n].clone()))?)
    }

    fn card(&self, prompt: &str, viewpoint: Holder) -> anyhow::Result<Card> {
        let notebook = self.ledger.notebook();
        let mut items = Vec::new();
        for category in Category::all() {
            items.extend(render::cards(notebook, viewpoint, *category)?);
        }
        let n = prompt::choose(prompt, &items)?;
        Ok(notebook
            .registry()
            .cards()
            .nth(n)
            .ok_or(Error::UnknownCard(items[n].clone()))?)
    }
}
