use crate::models::{Episode, Part, TocContent};
use crate::orphan::synthesize;
use crate::range::expand;
use crate::segment::{Item, Run};

/// Turns segmented runs into the final, homogeneous content.
///
/// As soon as one run carries a volume number, every run becomes a [`Part`]
/// (in flush order); otherwise the single implicit run is emitted as a flat
/// list of episodes.
pub(crate) fn assemble(runs: Vec<Run>, finished: bool) -> TocContent {
    let episodes = |items: Vec<Item>| -> Vec<Episode> {
        synthesize(items, finished)
            .into_iter()
            .flat_map(expand)
            .collect()
    };
    if runs.iter().any(|run| run.volume.is_some()) {
        let parts = runs
            .into_iter()
            .filter_map(|run| {
                let volume = run.volume?;
                Some(Part::new(run.title, volume, episodes(run.items)))
            })
            .collect();
        TocContent::Parts(parts)
    } else {
        TocContent::Episodes(runs.into_iter().flat_map(|run| episodes(run.items)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{Indexed, Token};
    use crate::models::RawEntry;

    fn item(total: u32) -> Item {
        Item::new(
            Token::Indexed(Indexed::new(total, "")),
            RawEntry::new("", format!("https://example.com/{total}")),
        )
    }

    #[test]
    fn volume_less_run_is_flat() {
        let runs = vec![Run {
            volume: None,
            title: String::new(),
            items: vec![item(1), item(2)],
        }];
        let TocContent::Episodes(episodes) = assemble(runs, false) else {
            panic!("expected flat episodes");
        };
        assert_eq!(episodes.iter().map(|e| e.combi_index).collect::<Vec<_>>(), vec![1.0, 2.0]);
    }

    #[test]
    fn volumes_become_parts() {
        let runs = vec![
            Run {
                volume: Some(1),
                title: "One".to_string(),
                items: vec![item(1)],
            },
            Run {
                volume: Some(2),
                title: String::new(),
                items: vec![],
            },
        ];
        let TocContent::Parts(parts) = assemble(runs, false) else {
            panic!("expected parts");
        };
        assert_eq!(parts.len(), 2);
        assert_eq!((parts[0].title.as_str(), parts[0].total_index, parts[0].combi_index), ("One", 1, 1.0));
        assert_eq!(parts[0].partial_index, None);
        assert_eq!(parts[0].episodes.len(), 1);
        assert!(parts[1].episodes.is_empty());
    }

    #[test]
    fn nothing_in_nothing_out() {
        assert_eq!(assemble(Vec::new(), true), TocContent::Episodes(Vec::new()));
    }
}
