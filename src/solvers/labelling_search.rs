use super::EnumerationLimits;
use crate::utils::{attack_table::AttackTable, Label, Labelling};
use log::{debug, warn};

const LABEL_ORDER: [Label; 3] = [Label::In, Label::Out, Label::Undec];

/// The result of a labelling search.
pub(crate) struct SearchResult {
    pub(crate) labellings: Vec<Labelling>,
    pub(crate) partial: bool,
}

/// A backtracking search for complete labellings.
///
/// The search starts from the grounded labelling, whose IN and OUT labels are shared by all complete labellings,
/// and assigns a label to the remaining arguments in ascending id order.
/// After each assignment, the legality of the assigned argument and of the (already labelled) arguments it attacks is checked
/// against the partial labelling; a branch is cut as soon as one of them cannot be legal anymore.
///
/// A labelling is legal when:
///   * IN arguments have all their attackers OUT,
///   * OUT arguments have at least one IN attacker,
///   * UNDEC arguments have no IN attacker and at least one UNDEC attacker.
///
/// When UNDEC labels are disallowed, the search returns the stable labellings.
pub(crate) struct LabellingSearch<'a> {
    table: &'a AttackTable,
    labels: Vec<Option<Label>>,
    order: Vec<usize>,
    allow_undec: bool,
    max_candidates: Option<usize>,
    n_candidates: usize,
    found: Vec<Labelling>,
    partial: bool,
}

impl<'a> LabellingSearch<'a> {
    pub(crate) fn new(
        table: &'a AttackTable,
        grounded: &Labelling,
        allow_undec: bool,
        limits: EnumerationLimits,
    ) -> Self {
        let mut labels = vec![None; table.width()];
        let mut order = vec![];
        for id in table.present().iter() {
            match grounded.label_of(id) {
                Some(Label::Undec) | None => order.push(id),
                l => labels[id] = l,
            }
        }
        Self {
            table,
            labels,
            order,
            allow_undec,
            max_candidates: limits.max_candidates(),
            n_candidates: 0,
            found: vec![],
            partial: false,
        }
    }

    pub(crate) fn run(mut self) -> SearchResult {
        debug!(
            "searching labellings over {} undecided argument(s)",
            self.order.len()
        );
        self.search(0);
        if self.partial {
            warn!(
                "enumeration stopped after {} candidates; returning {} labelling(s) found so far",
                self.n_candidates,
                self.found.len()
            );
        } else {
            debug!(
                "search ended after {} candidates with {} labelling(s)",
                self.n_candidates,
                self.found.len()
            );
        }
        SearchResult {
            labellings: self.found,
            partial: self.partial,
        }
    }

    // Returns false iff the search must be stopped.
    fn search(&mut self, depth: usize) -> bool {
        if depth == self.order.len() {
            self.found.push(Labelling::new(self.labels.clone()));
            return true;
        }
        let id = self.order[depth];
        for label in LABEL_ORDER {
            if label == Label::Undec && !self.allow_undec {
                continue;
            }
            self.n_candidates += 1;
            if self.max_candidates.is_some_and(|max| self.n_candidates > max) {
                self.partial = true;
                self.labels[id] = None;
                return false;
            }
            self.labels[id] = Some(label);
            if self.is_consistent_after(id) && !self.search(depth + 1) {
                self.labels[id] = None;
                return false;
            }
        }
        self.labels[id] = None;
        true
    }

    fn is_consistent_after(&self, id: usize) -> bool {
        self.may_be_legal(id)
            && self
                .table
                .targets(id)
                .iter()
                .all(|t| self.labels[*t].is_none() || self.may_be_legal(*t))
    }

    fn may_be_legal(&self, id: usize) -> bool {
        let (mut n_in, mut n_undec, mut n_unknown) = (0, 0, 0);
        for attacker in self.table.attackers(id) {
            match self.labels[*attacker] {
                Some(Label::In) => n_in += 1,
                Some(Label::Undec) => n_undec += 1,
                Some(Label::Out) => {}
                None => n_unknown += 1,
            }
        }
        match self.labels[id] {
            Some(Label::In) => n_in == 0 && n_undec == 0,
            Some(Label::Out) => n_in > 0 || n_unknown > 0,
            Some(Label::Undec) => n_in == 0 && (n_undec > 0 || n_unknown > 0),
            None => true,
        }
    }
}
