//! Bulk selection of format set clusters in the set multi-select.
//!
//! The widget owns the selection; the only way to change an option is to
//! click it. `select_format_sets` therefore reads each option's state first
//! and clicks only when it differs from the target, so calling it twice is
//! a no-op the second time.

use crate::models::FormatCluster;

/// What the selection algorithm needs from a multi-select widget.
pub trait SetOptionSelector {
    /// `Some(active)` for the option whose label is exactly `name`, `None`
    /// when no option matches.
    fn is_option_selected(&self, name: &str) -> Option<bool>;

    /// Toggle the option labelled `name` as a user click would.
    fn click_option(&mut self, name: &str);
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionReport {
    pub clicks: usize,
    pub unmatched: Vec<String>,
}

pub fn select_format_sets<S: SetOptionSelector + ?Sized>(
    selector: &mut S,
    clusters: &[FormatCluster],
    set_active: bool,
) -> SelectionReport {
    let mut report = SelectionReport::default();
    for set in clusters.iter().flat_map(|cluster| cluster.sets.iter()) {
        match selector.is_option_selected(&set.name) {
            Some(active) if active != set_active => {
                selector.click_option(&set.name);
                report.clicks += 1;
            }
            Some(_) => {}
            None => report.unmatched.push(set.name.clone()),
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SetRef;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    /// In-memory widget: option label → active.
    #[derive(Default)]
    struct FakeWidget {
        options: BTreeMap<String, bool>,
        clicks: Vec<String>,
    }

    impl FakeWidget {
        fn with(names: &[&str]) -> Self {
            Self {
                options: names.iter().map(|n| (n.to_string(), false)).collect(),
                clicks: Vec::new(),
            }
        }
    }

    impl SetOptionSelector for FakeWidget {
        fn is_option_selected(&self, name: &str) -> Option<bool> {
            self.options.get(name).copied()
        }

        fn click_option(&mut self, name: &str) {
            if let Some(active) = self.options.get_mut(name) {
                *active = !*active;
                self.clicks.push(name.to_string());
            }
        }
    }

    fn cluster(names: &[&str]) -> FormatCluster {
        FormatCluster {
            name: None,
            sets: names.iter().map(|n| SetRef { name: n.to_string() }).collect(),
        }
    }

    #[test]
    fn selects_only_named_sets() {
        let mut widget = FakeWidget::with(&["Ancient Nights", "Legacy Lost", "Vingolf"]);
        let report = select_format_sets(&mut widget, &[cluster(&["Ancient Nights", "Legacy Lost"])], true);

        assert_eq!(report.clicks, 2);
        assert!(report.unmatched.is_empty());
        assert_eq!(widget.options["Ancient Nights"], true);
        assert_eq!(widget.options["Legacy Lost"], true);
        assert_eq!(widget.options["Vingolf"], false, "unnamed sets are untouched");
    }

    #[test]
    fn second_call_issues_no_clicks() {
        let mut widget = FakeWidget::with(&["A", "B"]);
        let clusters = [cluster(&["A"]), cluster(&["B"])];
        assert_eq!(select_format_sets(&mut widget, &clusters, true).clicks, 2);
        assert_eq!(select_format_sets(&mut widget, &clusters, true).clicks, 0);
        assert_eq!(widget.clicks, vec!["A", "B"]);
    }

    #[test]
    fn unmatched_names_are_skipped_and_reported() {
        let mut widget = FakeWidget::with(&["Alice's Origin"]);
        let report = select_format_sets(
            &mut widget,
            &[cluster(&["alice's origin", "Alice's Origin", "Renamed Set"])],
            true,
        );
        assert_eq!(report.clicks, 1);
        assert_eq!(report.unmatched, vec!["alice's origin", "Renamed Set"]);
        assert_eq!(widget.options["Alice's Origin"], true);
    }

    proptest! {
        #[test]
        fn select_then_deselect_leaves_named_sets_unselected(
            initial in prop::collection::vec(any::<bool>(), 6),
            named in prop::collection::btree_set(0usize..6, 0..6),
        ) {
            let names: Vec<String> = (0..6).map(|i| format!("Set {}", i)).collect();
            let mut widget = FakeWidget {
                options: names.iter().cloned().zip(initial.iter().copied()).collect(),
                clicks: Vec::new(),
            };
            let chosen: Vec<&str> = named.iter().map(|i| names[*i].as_str()).collect();
            let clusters = [cluster(&chosen)];

            select_format_sets(&mut widget, &clusters, true);
            for name in &chosen {
                prop_assert_eq!(widget.options[*name], true);
            }
            select_format_sets(&mut widget, &clusters, false);
            for (i, name) in names.iter().enumerate() {
                let expected = if named.contains(&i) { false } else { initial[i] };
                prop_assert_eq!(widget.options[name], expected);
            }
        }
    }
}
