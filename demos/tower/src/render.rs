//! Plain-text view of the building, one frame per snapshot.

use std::io::{self, Write};

use lift_sim::{CabinSnapshot, SimObserver};

/// Draws floors top-down with the cabin, its load and the waiting counts.
///
/// ```text
/// T3  up -> floor 5
///   4          1 waiting
///   3  [ 1]
///   2
///   1
///   0
///   onboard to: 5
/// ```
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, s: &CabinSnapshot) -> io::Result<()> {
        match s.target {
            Some(target) => writeln!(self.out, "{}  {} -> {target}", s.tick, s.direction)?,
            None => writeln!(self.out, "{}  {}", s.tick, s.direction)?,
        }

        for (floor, &waiting) in s.waiting.iter().enumerate().rev() {
            let cabin = if s.floor.index() == floor {
                format!("[{:>2}]", s.onboard())
            } else {
                "    ".to_owned()
            };
            if waiting > 0 {
                writeln!(self.out, "{floor:>3}  {cabin}  {waiting:>3} waiting")?;
            } else {
                writeln!(self.out, "{floor:>3}  {cabin}")?;
            }
        }

        let destinations: Vec<String> =
            s.onboard_destinations.iter().map(|f| f.0.to_string()).collect();
        if destinations.is_empty() {
            writeln!(self.out, "  onboard to: -")?;
        } else {
            writeln!(self.out, "  onboard to: {}", destinations.join(", "))?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> SimObserver for TextRenderer<W> {
    fn on_snapshot(&mut self, snapshot: &CabinSnapshot) {
        if let Err(e) = self.draw(snapshot) {
            log::warn!("render failed at {}: {e}", snapshot.tick);
        }
    }
}
