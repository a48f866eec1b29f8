//! Full round exercise: sample from a large pool, load a board, play a
//! clue through its whole reveal progression, then restart.

use std::collections::BTreeMap;

use cluegrid_client::{
    CategoryDetail, CategorySource, CategorySummary, FetchError, WireClue, new_round,
};
use cluegrid_core::{
    BoardConfig, CategoryId, RevealOutcome, RevealState, Session,
};
use rand::SeedableRng as _;
use rand::rngs::StdRng;

struct BigPool {
    details: BTreeMap<u64, CategoryDetail>,
}

impl BigPool {
    fn new(categories: u64, clues_per_category: usize) -> Self {
        let details = (0..categories)
            .map(|id| {
                let clues = (0..clues_per_category)
                    .map(|i| WireClue {
                        question: format!("question {id}-{i}"),
                        answer: format!("answer {id}-{i}"),
                    })
                    .collect();
                (
                    id,
                    CategoryDetail {
                        title: format!("category {id}"),
                        clues,
                    },
                )
            })
            .collect();
        Self { details }
    }
}

impl CategorySource for BigPool {
    async fn list_categories(&self) -> Result<Vec<CategorySummary>, FetchError> {
        Ok(self
            .details
            .iter()
            .map(|(&id, detail)| CategorySummary {
                id: CategoryId(id),
                title: detail.title.clone(),
                clues_count: detail.clues.len() as u32,
            })
            .collect())
    }

    async fn category_detail(&self, id: CategoryId) -> Result<CategoryDetail, FetchError> {
        self.details
            .get(&id.0)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                status: 404,
                url: format!("fake://category?id={id}"),
            })
    }
}

#[tokio::test]
async fn six_by_five_round_reveals_and_restarts() {
    let source = BigPool::new(100, 5);
    let config = BoardConfig::default();
    let mut session = Session::new();

    let round = session.begin_round();
    let board = new_round(&source, config, &mut StdRng::seed_from_u64(99))
        .await
        .unwrap();
    assert!(session.complete_round(round, board).is_installed());

    let board = session.board().unwrap();
    assert_eq!(board.columns(), 6);
    assert_eq!(board.rows(), 5);
    assert!(
        board
            .categories()
            .iter()
            .flat_map(|cat| cat.clues())
            .all(|clue| clue.reveal() == RevealState::Hidden)
    );

    // First click shows the question.
    let question = board.clue_at(2, 3).unwrap().question().to_owned();
    assert_eq!(
        session.transition(2, 3).unwrap(),
        RevealOutcome::Revealed {
            state: RevealState::Question,
            text: question,
        }
    );

    // Second click shows the answer.
    let answer = session
        .board()
        .unwrap()
        .clue_at(2, 3)
        .unwrap()
        .answer()
        .to_owned();
    assert_eq!(
        session.transition(2, 3).unwrap(),
        RevealOutcome::Revealed {
            state: RevealState::Answer,
            text: answer,
        }
    );

    // Third click is a harmless no-op.
    assert_eq!(session.transition(2, 3).unwrap(), RevealOutcome::NoOp);

    // Restart: the replacement board starts fully hidden again.
    session.transition(0, 0).unwrap();
    let restart = session.begin_round();
    let fresh = new_round(&source, config, &mut StdRng::seed_from_u64(100))
        .await
        .unwrap();
    assert!(session.complete_round(restart, fresh).is_installed());
    assert_eq!(
        session.board().unwrap().clue_at(0, 0).unwrap().reveal(),
        RevealState::Hidden
    );
    assert_eq!(
        session.board().unwrap().clue_at(2, 3).unwrap().reveal(),
        RevealState::Hidden
    );
}
