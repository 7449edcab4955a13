use chrono::NaiveDate;

use recibo_core::{LineItemId, format_brl};
use recibo_header::{HeaderConfig, HeaderEditSession, HeaderField};
use recibo_persistence::HeaderStore;

use crate::line_item::{LineField, LineItemStore};
use crate::totals;

/// One line item as rendered: stored fields plus derived totals.
#[derive(Debug, Clone, PartialEq)]
pub struct LineView {
    pub id: LineItemId,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub line_total: f64,
    pub line_total_display: String,
}

/// Read-only view of the whole document, consumed by the rendering
/// collaborator. Totals are derived at snapshot time, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptSnapshot {
    /// The letterhead to display: the draft while editing, the committed
    /// config otherwise.
    pub header: HeaderConfig,
    pub editing_header: bool,
    pub customer_name: String,
    pub customer_address: String,
    pub document_date: Option<NaiveDate>,
    pub lines: Vec<LineView>,
    pub grand_total: f64,
    pub grand_total_display: String,
}

/// Composition root of the editor.
///
/// Owns the line-item collection, the letterhead edit session and the
/// per-document fields. All mutation commands execute synchronously on the
/// single logical thread of control; rendering reads [`ReceiptSnapshot`]s
/// rather than owning any state.
pub struct ReceiptModel<S> {
    header: HeaderEditSession<S>,
    lines: LineItemStore,
    customer_name: String,
    customer_address: String,
    document_date: Option<NaiveDate>,
    export_hook: Option<Box<dyn Fn()>>,
}

impl<S: HeaderStore> ReceiptModel<S> {
    /// Open a new document: letterhead loaded once from the store, one
    /// default line item ready for input.
    pub fn new(store: S) -> Self {
        let mut lines = LineItemStore::new();
        lines.add_line();

        Self {
            header: HeaderEditSession::load(store),
            lines,
            customer_name: String::new(),
            customer_address: String::new(),
            document_date: None,
            export_hook: None,
        }
    }

    // --- line-item commands -------------------------------------------------

    pub fn add_line(&mut self) -> LineItemId {
        self.lines.add_line()
    }

    pub fn update_line(&mut self, id: LineItemId, field: LineField, raw: &str) {
        self.lines.update_field(id, field, raw);
    }

    pub fn remove_line(&mut self, id: LineItemId) {
        self.lines.remove_line(id);
    }

    pub fn lines(&self) -> &LineItemStore {
        &self.lines
    }

    // --- letterhead commands ------------------------------------------------

    pub fn begin_header_edit(&mut self) {
        self.header.begin_edit();
    }

    pub fn edit_header_field(&mut self, field: HeaderField, value: impl Into<String>) {
        self.header.edit_field(field, value);
    }

    pub fn commit_header(&mut self) {
        self.header.commit();
    }

    pub fn cancel_header_edit(&mut self) {
        self.header.cancel();
    }

    pub fn header(&self) -> &HeaderEditSession<S> {
        &self.header
    }

    // --- document fields ----------------------------------------------------

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    pub fn set_customer_address(&mut self, address: impl Into<String>) {
        self.customer_address = address.into();
    }

    /// Set the document date from raw `YYYY-MM-DD` input.
    ///
    /// Empty or unparsable input clears the date; date entry never rejects.
    pub fn set_document_date(&mut self, raw: &str) {
        let raw = raw.trim();
        if raw.is_empty() {
            self.document_date = None;
            return;
        }
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => self.document_date = Some(date),
            Err(e) => {
                tracing::debug!(raw, error = %e, "unparsable document date cleared");
                self.document_date = None;
            }
        }
    }

    pub fn document_date(&self) -> Option<NaiveDate> {
        self.document_date
    }

    // --- export -------------------------------------------------------------

    /// Install the rendering collaborator's print/export action.
    pub fn set_export_hook(&mut self, hook: impl Fn() + 'static) {
        self.export_hook = Some(Box::new(hook));
    }

    /// Opaque pass-through: ask the rendering collaborator to produce
    /// printable output. The core observes no parameters and no result.
    pub fn export(&self) {
        match &self.export_hook {
            Some(hook) => hook(),
            None => tracing::debug!("export requested with no hook installed"),
        }
    }

    // --- read side ----------------------------------------------------------

    /// Derive the full render view. Totals are recomputed on every call.
    pub fn snapshot(&self) -> ReceiptSnapshot {
        let lines: Vec<LineView> = self
            .lines
            .items()
            .iter()
            .map(|item| {
                let line_total = totals::line_total(item);
                LineView {
                    id: item.id,
                    description: item.description.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    line_total,
                    line_total_display: format_brl(line_total),
                }
            })
            .collect();
        let grand_total = totals::grand_total(self.lines.items());

        ReceiptSnapshot {
            header: self.header.displayed(),
            editing_header: self.header.is_editing(),
            customer_name: self.customer_name.clone(),
            customer_address: self.customer_address.clone(),
            document_date: self.document_date,
            lines,
            grand_total,
            grand_total_display: format_brl(grand_total),
        }
    }
}
