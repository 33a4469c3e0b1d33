use serde::Serialize;

use crate::error::BoardShellError;
use crate::platform::PageDom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionOutcome {
    pub checked: bool,
    pub rows_updated: usize,
}

/// Fans the header checkbox state out to the row checkboxes.
///
/// Rows are only synchronised on header clicks; individual row clicks may
/// diverge until the next one.
#[derive(Debug, Clone)]
pub struct BulkSelectionToggle {
    header_selector: String,
    row_selector: String,
}

impl BulkSelectionToggle {
    pub fn new(header_selector: impl Into<String>, row_selector: impl Into<String>) -> Self {
        Self {
            header_selector: header_selector.into(),
            row_selector: row_selector.into(),
        }
    }

    pub fn header_selector(&self) -> &str {
        &self.header_selector
    }

    /// Must run after the browser applied its default toggle. `clicked` is
    /// the state of the header that received the click; without it the
    /// first header matching the selector is read.
    pub fn on_header_click(
        &self,
        dom: &mut impl PageDom,
        clicked: Option<bool>,
    ) -> Result<SelectionOutcome, BoardShellError> {
        let checked = match clicked {
            Some(checked) => checked,
            None => dom.is_checked(&self.header_selector)?,
        };
        let rows_updated = dom.set_all_checked(&self.row_selector, checked)?;
        tracing::debug!(checked, rows_updated, "row checkboxes synchronised");
        Ok(SelectionOutcome {
            checked,
            rows_updated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakePage;

    const HEADER: &str = ".js-check-all";
    const ROWS: &str = "th input[type=\"checkbox\"]";

    #[test]
    fn rows_follow_header_regardless_of_prior_state() {
        fn property(target: bool, prior: Vec<bool>) -> bool {
            let mut page = FakePage::default()
                .with_checkboxes(HEADER, &[!target])
                .with_checkboxes(ROWS, &prior);
            page.toggle_header(HEADER, target);
            let toggle = BulkSelectionToggle::new(HEADER, ROWS);
            let Ok(outcome) = toggle.on_header_click(&mut page, None) else {
                return false;
            };
            outcome.checked == target
                && outcome.rows_updated == prior.len()
                && page.checkboxes_of(ROWS).iter().all(|state| *state == target)
        }
        quickcheck::quickcheck(property as fn(bool, Vec<bool>) -> bool);
    }

    #[test]
    fn empty_row_set_is_a_no_op() {
        let mut page = FakePage::default().with_checkboxes(HEADER, &[true]);
        let toggle = BulkSelectionToggle::new(HEADER, ROWS);
        let outcome = toggle.on_header_click(&mut page, None).expect("no rows is fine");
        assert_eq!(
            outcome,
            SelectionOutcome {
                checked: true,
                rows_updated: 0
            }
        );
    }

    #[test]
    fn missing_header_is_reported() {
        let mut page = FakePage::default().with_checkboxes(ROWS, &[false, true]);
        let toggle = BulkSelectionToggle::new(HEADER, ROWS);
        let error = toggle.on_header_click(&mut page, None).expect_err("no header");
        assert!(error.is_element_not_found());
        assert_eq!(page.checkboxes_of(ROWS), vec![false, true]);
    }

    #[test]
    fn clicked_header_wins_over_first_match() {
        let mut page = FakePage::default()
            .with_checkboxes(HEADER, &[false, false])
            .with_checkboxes(ROWS, &[false, false, false]);
        let (_, context) = page.toggle_header_at(HEADER, 1, true);
        let toggle = BulkSelectionToggle::new(HEADER, ROWS);

        let outcome = toggle
            .on_header_click(&mut page, context.target_checked)
            .expect("second header clicked");

        assert!(outcome.checked);
        assert_eq!(page.checkboxes_of(ROWS), vec![true; 3]);
        assert_eq!(page.checkboxes_of(HEADER), vec![false, true]);
    }
}
