use super::{attack_table::AttackTable, Label, Labelling};

/// Computes the grounded labelling from an attack table.
///
/// Unattacked arguments are labelled IN; the arguments they attack are labelled OUT,
/// and the arguments whose attackers are all OUT are labelled IN in turn.
/// The arguments reached by none of these propagations are UNDEC.
///
/// The propagation processes each effective attack at most twice,
/// making the computation linear in the size of the framework.
pub(crate) fn grounded_labelling(table: &AttackTable) -> Labelling {
    let width = table.width();
    let mut ext = vec![];
    let mut n_processed_args = 0;
    let mut defeated_args = vec![false; width];
    let mut attacked_by = (0..width)
        .map(|i| {
            let n = table.attackers(i).len();
            if n == 0 && table.present().contains(i) {
                ext.push(i)
            }
            n
        })
        .collect::<Vec<usize>>();
    while n_processed_args < ext.len() {
        let id = ext[n_processed_args];
        for defeated in table.targets(id) {
            if !defeated_args[*defeated] {
                defeated_args[*defeated] = true;
                for attacked in table.targets(*defeated) {
                    attacked_by[*attacked] -= 1;
                    if attacked_by[*attacked] == 0 {
                        ext.push(*attacked)
                    }
                }
            }
        }
        n_processed_args += 1;
    }
    let mut labels = (0..width)
        .map(|i| {
            if !table.present().contains(i) {
                None
            } else if defeated_args[i] {
                Some(Label::Out)
            } else {
                Some(Label::Undec)
            }
        })
        .collect::<Vec<Option<Label>>>();
    ext.iter().for_each(|i| labels[*i] = Some(Label::In));
    Labelling::new(labels)
}
