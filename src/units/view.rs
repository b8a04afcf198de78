//! Row Projection
//!
//! Display rows derived from the unit collection, with search and sorting.

use std::cmp::Ordering;

use super::Unit;

/// Stringified display fields of one unit. `index` points back into the
/// collection the row was projected from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRow {
    pub index: usize,
    pub id: String,
    pub block: String,
    pub unit_number: String,
    pub floor: String,
    pub resident_name: String,
    pub phone_number: String,
}

impl UnitRow {
    pub fn from_unit(index: usize, unit: &Unit) -> Self {
        Self {
            index,
            id: unit.id.clone(),
            block: unit.fields.block.clone(),
            unit_number: unit.fields.unit_number.to_string(),
            floor: unit.fields.floor.to_string(),
            resident_name: unit.fields.resident_name.clone(),
            phone_number: unit.fields.phone_number.clone(),
        }
    }

    pub fn cell(&self, column: SortColumn) -> &str {
        match column {
            SortColumn::Block => &self.block,
            SortColumn::UnitNumber => &self.unit_number,
            SortColumn::Floor => &self.floor,
            SortColumn::Resident => &self.resident_name,
            SortColumn::Phone => &self.phone_number,
        }
    }

    fn matches(&self, query_lower: &str) -> bool {
        SortColumn::ALL
            .iter()
            .any(|&col| self.cell(col).to_lowercase().contains(query_lower))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Block,
    UnitNumber,
    Floor,
    Resident,
    Phone,
}

impl SortColumn {
    /// Table column order.
    pub const ALL: [SortColumn; 5] = [
        Self::Block,
        Self::UnitNumber,
        Self::Floor,
        Self::Resident,
        Self::Phone,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Self::Block => "Block",
            Self::UnitNumber => "Unit No",
            Self::Floor => "Floor",
            Self::Resident => "Resident",
            Self::Phone => "Phone",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Block => Self::UnitNumber,
            Self::UnitNumber => Self::Floor,
            Self::Floor => Self::Resident,
            Self::Resident => Self::Phone,
            Self::Phone => Self::Block,
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "block" => Some(Self::Block),
            "unit" | "unitno" | "number" => Some(Self::UnitNumber),
            "floor" => Some(Self::Floor),
            "resident" | "name" => Some(Self::Resident),
            "phone" => Some(Self::Phone),
            _ => None,
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(self, Self::UnitNumber | Self::Floor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

pub fn project(units: &[Unit]) -> Vec<UnitRow> {
    units
        .iter()
        .enumerate()
        .map(|(i, u)| UnitRow::from_unit(i, u))
        .collect()
}

pub fn filter_rows(rows: Vec<UnitRow>, query: Option<&str>) -> Vec<UnitRow> {
    let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) else {
        return rows;
    };
    let query_lower = query.to_lowercase();
    rows.into_iter().filter(|r| r.matches(&query_lower)).collect()
}

/// Stable sort, so rows with equal keys keep server order.
pub fn sort_rows(rows: &mut [UnitRow], column: SortColumn, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ord = compare_cells(a.cell(column), b.cell(column), column);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

fn compare_cells(a: &str, b: &str, column: SortColumn) -> Ordering {
    if column.is_numeric() {
        if let (Ok(x), Ok(y)) = (a.parse::<i64>(), b.parse::<i64>()) {
            return x.cmp(&y);
        }
    }
    a.to_lowercase().cmp(&b.to_lowercase())
}
