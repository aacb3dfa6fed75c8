//! Output table: one row per player-season, written as CSV.

pub mod builder;

use std::{collections::HashMap, fs::File, io::Write, path::Path};

use crate::{
    cli::types::Season,
    error::NhlError,
    nhl::types::{PlayerPersonalInfo, PlayerSeasonalStats},
    Result,
};

/// Column holding the `"{season}-{season+1}"` label.
pub const SEASON_COLUMN: &str = "season";

/// Bio columns, in output order. Stat columns follow, then `season`.
pub const PERSONAL_COLUMNS: [&str; 5] = ["id", "fullName", "height", "weight", "age"];

/// Personal info and single-season stats of one player, stamped with the season.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub info: PlayerPersonalInfo,
    pub stats: PlayerSeasonalStats,
    pub season: Season,
}

impl Row {
    /// Merge personal info and stats. Stat keys that collide with a bio or
    /// season column are dropped.
    pub fn new(info: PlayerPersonalInfo, mut stats: PlayerSeasonalStats, season: Season) -> Self {
        stats.entries.retain(|(key, _)| {
            let collides = key == SEASON_COLUMN || PERSONAL_COLUMNS.contains(&key.as_str());
            if collides {
                tracing::warn!(
                    "Dropping stat {:?} for {}: collides with a personal info column",
                    key,
                    info.full_name
                );
            }
            !collides
        });

        Self {
            info,
            stats,
            season,
        }
    }

    pub fn season_label(&self) -> String {
        self.season.label()
    }

    /// `(column, value)` pairs in natural column order.
    fn cells(&self) -> Vec<(&str, String)> {
        let mut cells = Vec::with_capacity(PERSONAL_COLUMNS.len() + self.stats.len() + 1);
        cells.push(("id", self.info.id.to_string()));
        cells.push(("fullName", self.info.full_name.clone()));
        cells.push(("height", self.info.height.clone()));
        cells.push(("weight", self.info.weight.to_string()));
        cells.push(("age", self.info.age.to_string()));
        for (key, value) in &self.stats.entries {
            cells.push((key.as_str(), value.to_string()));
        }
        cells.push((SEASON_COLUMN, self.season_label()));
        cells
    }
}

/// Rectangular table of optional string cells.
///
/// Columns are the union of every row's keys in first-seen order; a row
/// without some column holds `None` there.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut table_rows = Vec::with_capacity(rows.len());

        for row in rows {
            let mut cells: Vec<Option<String>> = vec![None; columns.len()];
            for (column, value) in row.cells() {
                let position = match index.get(column) {
                    Some(&position) => position,
                    None => {
                        columns.push(column.to_string());
                        index.insert(column.to_string(), columns.len() - 1);
                        columns.len() - 1
                    }
                };
                if cells.len() <= position {
                    cells.resize(position + 1, None);
                }
                cells[position] = Some(value);
            }
            table_rows.push(cells);
        }

        for cells in &mut table_rows {
            cells.resize(columns.len(), None);
        }

        Self {
            columns,
            rows: table_rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `row` in column `name`.
    pub fn get(&self, row: usize, name: &str) -> Option<&str> {
        let column = self.column_index(name)?;
        self.rows.get(row)?.get(column)?.as_deref()
    }

    /// Return a copy with column `name` moved to 0-indexed `target` among the
    /// remaining columns. `self` is left untouched.
    pub fn move_column(&self, name: &str, target: usize) -> Result<Table> {
        let from = self.column_index(name).ok_or_else(|| NhlError::MissingColumn {
            name: name.to_string(),
        })?;
        let remaining = self.columns.len() - 1;
        if target > remaining {
            return Err(NhlError::ColumnIndexOutOfRange {
                index: target,
                len: remaining,
            });
        }

        let mut moved = self.clone();
        let column = moved.columns.remove(from);
        moved.columns.insert(target, column);
        for cells in &mut moved.rows {
            let cell = cells.remove(from);
            cells.insert(target, cell);
        }
        Ok(moved)
    }

    /// Write a header row plus one record per row; `None` cells are empty fields.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        if self.columns.is_empty() {
            return Ok(());
        }

        let mut out = csv::Writer::from_writer(writer);
        out.write_record(&self.columns)?;
        for cells in &self.rows {
            out.write_record(cells.iter().map(|c| c.as_deref().unwrap_or("")))?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn write_csv_file(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.write_csv(file)
    }
}
