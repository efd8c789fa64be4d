use crate::model::{parse_price, OrderRecord};
use crate::widgets::form::{FormField, FormState};

/// Builds the editable field set for one order record and materializes the
/// current field values back into a record. Field order here is the order
/// the form screen displays.
pub struct OrderRecordController {
    original: OrderRecord,
    form: FormState,
}

impl OrderRecordController {
    pub fn new(record: OrderRecord, editable: bool) -> Self {
        let fields = vec![
            FormField::text("product", "Product", record.product.clone()),
            FormField::integer("quantity", "Quantity", record.quantity.to_string()),
            FormField::decimal("unit_price", "Unit price", record.price_display()),
            FormField::text("ordered_on", "Ordered on", record.ordered_on.clone()),
        ];
        Self {
            original: record,
            form: FormState::new(fields, !editable),
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.form.fields
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn is_editable(&self) -> bool {
        !self.form.read_only
    }

    /// Switch the already-built fields to in-place editing.
    pub fn make_editable(&mut self) {
        self.form.read_only = false;
    }

    /// Snapshot the current field values as a record. Values that do not
    /// parse keep the original record's value; this path never fails.
    pub fn updated_record(&self) -> OrderRecord {
        let mut rec = self.original.clone();
        for fld in &self.form.fields {
            let value = fld.value.trim();
            match fld.name.as_str() {
                "product" => {
                    if !value.is_empty() {
                        rec.product = value.to_string();
                    }
                }
                "quantity" => {
                    if let Ok(q) = value.parse() {
                        rec.quantity = q;
                    }
                }
                "unit_price" => {
                    if let Some(cents) = parse_price(value) {
                        rec.unit_price_cents = cents;
                    }
                }
                "ordered_on" => {
                    if !value.is_empty() {
                        rec.ordered_on = value.to_string();
                    }
                }
                _ => {}
            }
        }
        rec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> OrderRecord {
        OrderRecord {
            id: 7,
            product: "Widget".into(),
            quantity: 4,
            unit_price_cents: 1250,
            ordered_on: "2026-03-02".into(),
        }
    }

    #[test]
    fn fields_come_in_display_order() {
        let c = OrderRecordController::new(record(), false);
        let names: Vec<&str> = c.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["product", "quantity", "unit_price", "ordered_on"]);
        assert_eq!(c.fields()[1].value, "4");
        assert_eq!(c.fields()[2].value, "12.50");
        assert!(!c.is_editable());
    }

    #[test]
    fn make_editable_unlocks_the_form() {
        let mut c = OrderRecordController::new(record(), false);
        c.make_editable();
        assert!(c.is_editable());
    }

    #[test]
    fn updated_record_reflects_edits() {
        let mut c = OrderRecordController::new(record(), true);
        c.form_mut().fields[1].value = "9".into();
        c.form_mut().fields[2].value = "3.5".into();
        let rec = c.updated_record();
        assert_eq!(rec.quantity, 9);
        assert_eq!(rec.unit_price_cents, 350);
        assert_eq!(rec.id, 7);
        assert_eq!(rec.product, "Widget");
    }

    #[test]
    fn unparseable_values_fall_back_to_original() {
        let mut c = OrderRecordController::new(record(), true);
        c.form_mut().fields[0].value = "  ".into();
        c.form_mut().fields[1].value = "".into();
        c.form_mut().fields[2].value = "1.2.3".into();
        let rec = c.updated_record();
        assert_eq!(rec, record());
    }
}
