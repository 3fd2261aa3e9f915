use anyhow::Context;

use passgen::CharacterClass;

use crate::table::{display_table, TableDisplay};
use crate::ProgError;

struct ClassRow {
    class: CharacterClass,
    size: String,
}

impl TableDisplay for ClassRow {
    fn columns() -> usize {
        3
    }

    fn column_name(column_index: usize) -> &'static str {
        match column_index {
            0 => "Class",
            1 => "Size",
            2 => "Characters",
            _ => panic!(),
        }
    }

    fn item(&self, column_index: usize) -> &str {
        match column_index {
            0 => self.class.name(),
            1 => &self.size,
            2 => self.class.literal(),
            _ => panic!(),
        }
    }
}

pub(crate) fn list_classes() -> Result<(), ProgError> {
    let rows = CharacterClass::ALL
        .into_iter()
        .map(|class| ClassRow {
            class,
            size: class.literal().chars().count().to_string(),
        })
        .collect::<Vec<_>>();
    display_table(&rows, std::io::stdout()).context("failed to output table")?;
    Ok(())
}
