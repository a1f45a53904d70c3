use std::sync::Arc;

use mishmar::draft::{DraftController, PracticeDraft};
use mishmar::models::*;
use mishmar::storage::{MemoryStore, PracticeArchive};
use mishmar::store::PracticeStore;
use speculate2::speculate;
use tokio_test::block_on;

fn setup() -> (PracticeStore, DraftController) {
    let backend = Arc::new(MemoryStore::new());
    let store = block_on(PracticeStore::load(PracticeArchive::new(backend)));
    (store, DraftController::new())
}

speculate! {
    describe "defaults" {
        it "starts with an empty draft and no editing target" {
            let controller = DraftController::new();

            assert_eq!(*controller.draft(), PracticeDraft::default());
            assert!(controller.editing_id().is_none());
            assert_eq!(controller.draft().category, Category::Prayer);
            assert_eq!(controller.draft().frequency, Frequency::Daily);
            assert!(controller.draft().name.is_empty());
        }
    }

    describe "commit" {
        it "rejects an empty name without touching the collection" {
            let (mut store, mut controller) = setup();
            controller.draft_mut().name = String::new();

            let result = block_on(controller.commit(&mut store));

            assert!(result.is_none());
            assert!(store.list().is_empty());
        }

        it "rejects a whitespace-only name without touching the collection" {
            let (mut store, mut controller) = setup();
            controller.draft_mut().name = "   ".to_string();

            let result = block_on(controller.commit(&mut store));

            assert!(result.is_none());
            assert!(store.list().is_empty());
            // The draft survives so the user can keep typing.
            assert_eq!(controller.draft().name, "   ");
        }

        it "creates a practice and resets the draft" {
            let (mut store, mut controller) = setup();
            controller.draft_mut().name = "Morning Prayer".to_string();
            controller.draft_mut().frequency = Frequency::Daily;

            let committed = block_on(controller.commit(&mut store)).expect("Commit rejected");

            assert_eq!(committed.name, "Morning Prayer");
            assert_eq!(store.list().len(), 1);
            assert_eq!(*controller.draft(), PracticeDraft::default());
            assert!(controller.editing_id().is_none());
        }

        it "drops empty optional fields and keeps filled ones" {
            let (mut store, mut controller) = setup();
            controller.draft_mut().name = "Shabbat Candles".to_string();
            controller.draft_mut().category = Category::Community;
            controller.draft_mut().frequency = Frequency::Weekly;
            controller.draft_mut().time = "Friday at sundown".to_string();
            controller.draft_mut().duration = "  ".to_string();

            let committed = block_on(controller.commit(&mut store)).expect("Commit rejected");

            assert_eq!(committed.time.as_deref(), Some("Friday at sundown"));
            assert!(committed.duration.is_none());
            assert!(committed.notes.is_none());
        }
    }

    describe "editing" {
        it "loads an existing practice into the draft" {
            let (mut store, mut controller) = setup();
            controller.draft_mut().name = "Morning Prayer".to_string();
            let practice = block_on(controller.commit(&mut store)).expect("Commit rejected");

            controller.start_edit(&practice);

            assert_eq!(controller.draft().name, "Morning Prayer");
            assert_eq!(controller.editing_id(), Some(practice.id));
            // Absent option fields come back as empty form text.
            assert!(controller.draft().time.is_empty());
        }

        it "replaces the edited record, preserving id and created_at" {
            let (mut store, mut controller) = setup();
            controller.draft_mut().name = "Morning Prayer".to_string();
            let original = block_on(controller.commit(&mut store)).expect("Commit rejected");

            controller.start_edit(&original);
            controller.draft_mut().name = "Evening Prayer".to_string();
            let updated = block_on(controller.commit(&mut store)).expect("Commit rejected");

            assert_eq!(store.list().len(), 1);
            assert_eq!(updated.name, "Evening Prayer");
            assert_eq!(updated.id, original.id);
            assert_eq!(updated.created_at, original.created_at);
            assert!(controller.editing_id().is_none());
        }

        it "yields None when the edited record was deleted underneath" {
            let (mut store, mut controller) = setup();
            controller.draft_mut().name = "Morning Prayer".to_string();
            let practice = block_on(controller.commit(&mut store)).expect("Commit rejected");

            controller.start_edit(&practice);
            controller.draft_mut().name = "Evening Prayer".to_string();
            block_on(store.remove(practice.id));

            let result = block_on(controller.commit(&mut store));

            assert!(result.is_none());
            assert!(store.list().is_empty());
        }
    }

    describe "cancel" {
        it "resets the draft and editing target without committing" {
            let (mut store, mut controller) = setup();
            controller.draft_mut().name = "Morning Prayer".to_string();
            let practice = block_on(controller.commit(&mut store)).expect("Commit rejected");

            controller.start_edit(&practice);
            controller.draft_mut().name = "Something else".to_string();
            controller.cancel();

            assert_eq!(*controller.draft(), PracticeDraft::default());
            assert!(controller.editing_id().is_none());
            assert_eq!(store.list()[0].name, "Morning Prayer");
        }
    }

    describe "start_create" {
        it "clears a draft left over from editing" {
            let (mut store, mut controller) = setup();
            controller.draft_mut().name = "Morning Prayer".to_string();
            let practice = block_on(controller.commit(&mut store)).expect("Commit rejected");

            controller.start_edit(&practice);
            controller.start_create();

            assert_eq!(*controller.draft(), PracticeDraft::default());
            assert!(controller.editing_id().is_none());
        }
    }
}
