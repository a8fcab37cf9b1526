// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Division affiliation records and id allocation.

use serde::Serialize;

/// One department/division affiliation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionData {
    pub id: u32,
    pub department_code: String,
    pub department_name: String,
    pub division_code: String,
    pub division_name: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_main: bool,
}

/// Text columns of a division row that the editor can change in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DivisionColumn {
    DepartmentCode,
    DepartmentName,
    DivisionCode,
    DivisionName,
}

impl DivisionColumn {
    pub const ALL: [DivisionColumn; 4] = [
        DivisionColumn::DepartmentCode,
        DivisionColumn::DepartmentName,
        DivisionColumn::DivisionCode,
        DivisionColumn::DivisionName,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::DepartmentCode => "Dept. code",
            Self::DepartmentName => "Department",
            Self::DivisionCode => "Div. code",
            Self::DivisionName => "Division",
        }
    }
}

impl DivisionData {
    pub fn column(&self, column: DivisionColumn) -> &str {
        match column {
            DivisionColumn::DepartmentCode => &self.department_code,
            DivisionColumn::DepartmentName => &self.department_name,
            DivisionColumn::DivisionCode => &self.division_code,
            DivisionColumn::DivisionName => &self.division_name,
        }
    }

    pub fn set_column(&mut self, column: DivisionColumn, value: String) {
        let slot = match column {
            DivisionColumn::DepartmentCode => &mut self.department_code,
            DivisionColumn::DepartmentName => &mut self.department_name,
            DivisionColumn::DivisionCode => &mut self.division_code,
            DivisionColumn::DivisionName => &mut self.division_name,
        };
        *slot = value;
    }
}

/// Create a blank division. The id defaults to `0` when not given.
pub fn create_empty_division(id: Option<u32>) -> DivisionData {
    DivisionData {
        id: id.unwrap_or(0),
        ..Default::default()
    }
}

/// Next free division id: one past the largest id present, or `1` for an empty set.
///
/// Input order and duplicate ids do not affect the result. Returns `None` when
/// the largest id is already `u32::MAX`.
pub fn generate_new_division_id(existing: &[DivisionData]) -> Option<u32> {
    match existing.iter().map(|d| d.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Demo rows used by the editor's "load sample" action.
pub fn sample_division_data() -> Vec<DivisionData> {
    vec![
        DivisionData {
            id: 1,
            department_code: "D001".into(),
            department_name: "Sales".into(),
            division_code: "DV001".into(),
            division_name: "First Sales Section".into(),
            start_date: "2024-01-01".into(),
            end_date: Some("2024-12-31".into()),
            is_main: true,
        },
        DivisionData {
            id: 2,
            department_code: "D002".into(),
            department_name: "Engineering".into(),
            division_code: "DV002".into(),
            division_name: "Systems Development".into(),
            start_date: "2024-06-01".into(),
            end_date: None,
            is_main: false,
        },
        DivisionData {
            id: 3,
            department_code: "D003".into(),
            department_name: "Human Resources".into(),
            division_code: "DV003".into(),
            division_name: "Personnel".into(),
            start_date: "2024-03-15".into(),
            end_date: Some("2025-03-14".into()),
            is_main: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_ids(ids: &[u32]) -> Vec<DivisionData> {
        ids.iter()
            .map(|&id| create_empty_division(Some(id)))
            .collect()
    }

    #[test]
    fn empty_division_is_zero_valued() {
        let d = create_empty_division(None);
        assert_eq!(d.id, 0);
        assert!(d.department_code.is_empty());
        assert!(d.department_name.is_empty());
        assert!(d.division_code.is_empty());
        assert!(d.division_name.is_empty());
        assert!(d.start_date.is_empty());
        assert_eq!(d.end_date, None);
        assert!(!d.is_main);
    }

    #[test]
    fn empty_division_keeps_id_override() {
        assert_eq!(create_empty_division(Some(42)).id, 42);
    }

    #[test]
    fn new_id_is_one_for_empty_collection() {
        assert_eq!(generate_new_division_id(&[]), Some(1));
    }

    #[test]
    fn new_id_is_max_plus_one() {
        assert_eq!(generate_new_division_id(&with_ids(&[1, 2, 3])), Some(4));
        assert_eq!(generate_new_division_id(&with_ids(&[0])), Some(1));
        assert_eq!(generate_new_division_id(&with_ids(&[5, 9])), Some(10));
    }

    #[test]
    fn new_id_ignores_order_and_duplicates() {
        let sorted = generate_new_division_id(&with_ids(&[2, 4, 7]));
        let shuffled = generate_new_division_id(&with_ids(&[7, 2, 4]));
        let duplicated = generate_new_division_id(&with_ids(&[7, 7, 2, 4, 2]));
        assert_eq!(sorted, Some(8));
        assert_eq!(shuffled, Some(8));
        assert_eq!(duplicated, Some(8));
    }

    #[test]
    fn new_id_is_none_once_ids_are_exhausted() {
        assert_eq!(generate_new_division_id(&with_ids(&[u32::MAX])), None);
        assert_eq!(generate_new_division_id(&with_ids(&[3, u32::MAX, 1])), None);
        assert_eq!(
            generate_new_division_id(&with_ids(&[u32::MAX - 1])),
            Some(u32::MAX)
        );
    }

    #[test]
    fn new_id_does_not_touch_input() {
        let rows = with_ids(&[3, 1]);
        let before = rows.clone();
        let _ = generate_new_division_id(&rows);
        assert_eq!(rows, before);
    }

    #[test]
    fn sample_data_has_unique_ids_and_one_main() {
        let rows = sample_division_data();
        assert_eq!(rows.len(), 3);
        assert_eq!(generate_new_division_id(&rows), Some(4));
        assert_eq!(rows.iter().filter(|d| d.is_main).count(), 1);
    }

    #[test]
    fn set_column_updates_text_fields() {
        let mut d = create_empty_division(Some(1));
        d.set_column(DivisionColumn::DivisionName, "Audit".into());
        assert_eq!(d.column(DivisionColumn::DivisionName), "Audit");
        assert_eq!(d.division_name, "Audit");
    }
}
