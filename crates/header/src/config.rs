use serde::{Deserialize, Serialize};

use recibo_persistence::HeaderRecord;

/// Editable letterhead fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderField {
    Title,
    Subtitle,
    Phone,
    AddressLine1,
    AddressLine2,
}

/// The committed, currently-displayed letterhead.
///
/// Exactly one instance exists per session; it is the single source of truth
/// for rendering when no edit is in progress, and it is only ever mutated by
/// a successful commit of a [`HeaderDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderConfig {
    pub title: String,
    pub subtitle: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: "Ferragem e Lubrificantes".to_string(),
            subtitle: "Materiais de Construção".to_string(),
            phone: "98919-6576".to_string(),
            address_line1: "Rua 1, nº 98, Setor 2".to_string(),
            address_line2: "Guajuviras - Canoas/RS".to_string(),
        }
    }
}

impl HeaderConfig {
    /// Build a config from a persisted record, keeping compiled-in defaults
    /// for every absent field. Narrow (three-field) records therefore leave
    /// the address lines at their defaults, not blank.
    pub fn from_record(record: &HeaderRecord) -> Self {
        let mut config = Self::default();
        config.apply_record(record);
        config
    }

    fn apply_record(&mut self, record: &HeaderRecord) {
        if let Some(v) = &record.title {
            self.title = v.clone();
        }
        if let Some(v) = &record.subtitle {
            self.subtitle = v.clone();
        }
        if let Some(v) = &record.phone {
            self.phone = v.clone();
        }
        if let Some(v) = &record.address_line1 {
            self.address_line1 = v.clone();
        }
        if let Some(v) = &record.address_line2 {
            self.address_line2 = v.clone();
        }
    }

    /// Full five-field wire shape (commit-time write).
    pub fn to_full_record(&self) -> HeaderRecord {
        HeaderRecord {
            title: Some(self.title.clone()),
            subtitle: Some(self.subtitle.clone()),
            phone: Some(self.phone.clone()),
            address_line1: Some(self.address_line1.clone()),
            address_line2: Some(self.address_line2.clone()),
        }
    }

    /// Narrow three-field wire shape (reflexive subset write).
    pub fn to_narrow_record(&self) -> HeaderRecord {
        HeaderRecord {
            title: Some(self.title.clone()),
            subtitle: Some(self.subtitle.clone()),
            phone: Some(self.phone.clone()),
            address_line1: None,
            address_line2: None,
        }
    }

    /// True when the `{title, subtitle, phone}` subset differs from `other`.
    pub(crate) fn narrow_subset_differs(&self, other: &Self) -> bool {
        self.title != other.title || self.subtitle != other.subtitle || self.phone != other.phone
    }
}

/// An uncommitted working copy of the letterhead.
///
/// Exists only while an edit session is open. It is seeded field-by-field
/// from the committed config, mutated freely while editing, and either
/// promoted wholesale by commit or discarded (never merged) by cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDraft {
    pub title: String,
    pub subtitle: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: String,
}

impl HeaderDraft {
    /// Snapshot the committed config into a fresh draft.
    pub fn snapshot(config: &HeaderConfig) -> Self {
        Self {
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            phone: config.phone.clone(),
            address_line1: config.address_line1.clone(),
            address_line2: config.address_line2.clone(),
        }
    }

    pub fn set(&mut self, field: HeaderField, value: impl Into<String>) {
        let value = value.into();
        match field {
            HeaderField::Title => self.title = value,
            HeaderField::Subtitle => self.subtitle = value,
            HeaderField::Phone => self.phone = value,
            HeaderField::AddressLine1 => self.address_line1 = value,
            HeaderField::AddressLine2 => self.address_line2 = value,
        }
    }

    /// Promote the draft into a committed config (commit transition only).
    pub(crate) fn into_config(self) -> HeaderConfig {
        HeaderConfig {
            title: self.title,
            subtitle: self.subtitle,
            phone: self.phone,
            address_line1: self.address_line1,
            address_line2: self.address_line2,
        }
    }

    /// Render projection of the draft while an edit is in progress.
    pub(crate) fn preview(&self) -> HeaderConfig {
        HeaderConfig {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            phone: self.phone.clone(),
            address_line1: self.address_line1.clone(),
            address_line2: self.address_line2.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_printed_letterhead() {
        let config = HeaderConfig::default();
        assert_eq!(config.title, "Ferragem e Lubrificantes");
        assert_eq!(config.subtitle, "Materiais de Construção");
        assert_eq!(config.phone, "98919-6576");
        assert_eq!(config.address_line1, "Rua 1, nº 98, Setor 2");
        assert_eq!(config.address_line2, "Guajuviras - Canoas/RS");
    }

    #[test]
    fn narrow_record_leaves_addresses_at_defaults() {
        let record = HeaderRecord {
            title: Some("Loja Nova".into()),
            subtitle: Some("Tintas".into()),
            phone: Some("1111-1111".into()),
            ..HeaderRecord::default()
        };
        let config = HeaderConfig::from_record(&record);
        assert_eq!(config.title, "Loja Nova");
        assert_eq!(config.address_line1, HeaderConfig::default().address_line1);
        assert_eq!(config.address_line2, HeaderConfig::default().address_line2);
    }

    #[test]
    fn full_record_round_trips() {
        let config = HeaderConfig {
            title: "T".into(),
            subtitle: "S".into(),
            phone: "P".into(),
            address_line1: "A1".into(),
            address_line2: "A2".into(),
        };
        assert_eq!(HeaderConfig::from_record(&config.to_full_record()), config);
    }

    #[test]
    fn draft_snapshot_copies_every_field() {
        let config = HeaderConfig::default();
        let draft = HeaderDraft::snapshot(&config);
        assert_eq!(draft.into_config(), config);
    }

    #[test]
    fn narrow_subset_comparison_ignores_addresses() {
        let a = HeaderConfig::default();
        let mut b = a.clone();
        b.address_line1 = "elsewhere".into();
        assert!(!a.narrow_subset_differs(&b));
        b.phone = "0000".into();
        assert!(a.narrow_subset_differs(&b));
    }
}
