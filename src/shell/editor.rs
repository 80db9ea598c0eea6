use itertools::Itertools;

use crate::prelude::*;

impl Settings {
    /// Lays the editable fields out as a numbered table.
    pub fn tabulate(&self) -> String {
        let rows = Field::all().into_iter().enumerate()
            .map(|(i, field)| format!("{:>2}) {:<28} {}", i + 1, field.name(), self.get(field)));
        std::iter::once(format!("Map: {}", self.map.name())).chain(rows).join("\n")
    }

    /// Lets the player change fields one at a time until they choose to leave.
    pub fn edit(&mut self, prompt: &mut dyn Prompt) -> Result<()> {
        let exit = Field::all().len() as i64 + 1;
        loop {
            prompt.say(&self.tabulate())?;
            let choice = prompt.ask_int(&format!("What would you like to edit? ({exit} to exit)"), 1, exit)?;
            if choice == exit {
                return Ok(());
            }

            let field = Field::all()[choice as usize - 1];
            let range = field.range();
            let value = prompt.ask_int(
                &format!("Enter the new {} ({} to {})", field.name().to_lowercase(), range.start(), range.end()),
                *range.start(), *range.end(),
            )?;
            self.set(field, value)?;
            log::debug!("{} set to {value}", field.name());
        }
    }
}
