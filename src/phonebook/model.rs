use serde::{Deserialize, Serialize};

/// The six columns of a phonebook row, in file and table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Surname,
    FirstName,
    Patronymic,
    Organization,
    WorkPhone,
    PersonalPhone,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Surname,
        Field::FirstName,
        Field::Patronymic,
        Field::Organization,
        Field::WorkPhone,
        Field::PersonalPhone,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn label(self) -> &'static str {
        match self {
            Field::Surname => "Surname",
            Field::FirstName => "First Name",
            Field::Patronymic => "Patronymic",
            Field::Organization => "Organization",
            Field::WorkPhone => "Work Phone",
            Field::PersonalPhone => "Personal Phone",
        }
    }

    /// Column width in the rendered table.
    pub fn width(self) -> usize {
        match self {
            Field::Organization => 30,
            _ => 20,
        }
    }
}

/// A single contact. Field order matches [`Field::ALL`], which is also the column
/// order of the backing CSV file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub surname: String,
    pub first_name: String,
    pub patronymic: String,
    pub organization: String,
    pub work_phone: String,
    pub personal_phone: String,
}

impl Record {
    pub fn from_fields(fields: [String; Field::COUNT]) -> Self {
        let [surname, first_name, patronymic, organization, work_phone, personal_phone] = fields;
        Self {
            surname,
            first_name,
            patronymic,
            organization,
            work_phone,
            personal_phone,
        }
    }

    pub fn into_fields(self) -> [String; Field::COUNT] {
        [
            self.surname,
            self.first_name,
            self.patronymic,
            self.organization,
            self.work_phone,
            self.personal_phone,
        ]
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Surname => &self.surname,
            Field::FirstName => &self.first_name,
            Field::Patronymic => &self.patronymic,
            Field::Organization => &self.organization,
            Field::WorkPhone => &self.work_phone,
            Field::PersonalPhone => &self.personal_phone,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Surname => &mut self.surname,
            Field::FirstName => &mut self.first_name,
            Field::Patronymic => &mut self.patronymic,
            Field::Organization => &mut self.organization,
            Field::WorkPhone => &mut self.work_phone,
            Field::PersonalPhone => &mut self.personal_phone,
        };
        *slot = value;
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        Field::ALL.into_iter().map(move |f| self.get(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smith() -> Record {
        Record::from_fields([
            "Smith".into(),
            "John".into(),
            "".into(),
            "Acme Inc".into(),
            "555-1".into(),
            "555-2".into(),
        ])
    }

    #[test]
    fn from_fields_follows_header_order() {
        let record = smith();
        assert_eq!(record.surname, "Smith");
        assert_eq!(record.organization, "Acme Inc");
        assert_eq!(record.personal_phone, "555-2");
        assert_eq!(record.get(Field::WorkPhone), "555-1");
    }

    #[test]
    fn set_replaces_only_the_named_field() {
        let mut record = smith();
        record.set(Field::Patronymic, "Paul".into());
        assert_eq!(record.patronymic, "Paul");
        assert_eq!(record.first_name, "John");
    }

    #[test]
    fn table_widths_sum_to_rule_length() {
        let total: usize = Field::ALL.iter().map(|f| f.width()).sum();
        assert_eq!(total, 130);
    }
}
