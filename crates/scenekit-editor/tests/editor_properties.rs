// Property tests for id allocation and the multi-select protocol.

mod common;

use std::collections::HashSet;

use common::{add_box, RecordingHost, RecordingUi};
use proptest::prelude::*;
use scenekit_editor::{InputModifiers, InteractionMode, PrimitiveType, SceneEditor};

const MODE: InteractionMode = InteractionMode::Translation;

fn any_prim_type() -> impl Strategy<Value = PrimitiveType> {
    prop::sample::select(vec![
        PrimitiveType::Box,
        PrimitiveType::Cylinder,
        PrimitiveType::Cone,
        PrimitiveType::Dish,
        PrimitiveType::Extrusion,
        PrimitiveType::SolidOfRevolution,
    ])
}

proptest! {
    /// Every successful add contributes exactly one fresh id; failed adds
    /// contribute nothing.
    #[test]
    fn prop_id_list_tracks_successful_adds(
        adds in prop::collection::vec((any_prim_type(), any::<bool>()), 1..24)
    ) {
        let mut editor = SceneEditor::new();
        let mut ui = RecordingUi::new();
        let mut host = RecordingHost::new();
        let mut expected = 0usize;

        for (prim_type, valid) in adds {
            let parameters = if valid {
                prim_type.default_parameters()
            } else {
                Vec::new()
            };
            let result = editor.add_primitive(&mut ui, &mut host, MODE, prim_type, &parameters);
            if valid {
                prop_assert!(result.is_ok());
                expected += 1;
            } else {
                prop_assert!(result.is_err());
            }
        }

        let ids = editor.id_list();
        prop_assert_eq!(ids.len(), expected);
        let unique: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(unique.len(), expected);
    }

    /// Shift-toggling any non-primary id twice restores the selection and
    /// every highlight flag.
    #[test]
    fn prop_shift_toggle_twice_is_identity(
        count in 2usize..8,
        target in 1usize..8,
        pretoggle in prop::collection::vec(1usize..8, 0..4),
    ) {
        prop_assume!(target < count);

        let mut editor = SceneEditor::new();
        let mut ui = RecordingUi::new();
        let mut host = RecordingHost::new();
        let ids: Vec<_> = (0..count)
            .map(|_| add_box(&mut editor, &mut ui, &mut host))
            .collect();

        editor.primitive_selected(&mut ui, &mut host, MODE, &ids[0], InputModifiers::none());
        for idx in pretoggle {
            let idx = idx % count;
            editor.primitive_selected(&mut ui, &mut host, MODE, &ids[idx], InputModifiers::shift());
        }

        let selection_before: HashSet<_> = editor.selected_ids().iter().cloned().collect();
        let primary_before = editor.selected_ids().first().cloned();
        let highlights_before: Vec<bool> =
            ids.iter().map(|id| host.is_highlighted(id)).collect();

        editor.primitive_selected(&mut ui, &mut host, MODE, &ids[target], InputModifiers::shift());
        editor.primitive_selected(&mut ui, &mut host, MODE, &ids[target], InputModifiers::shift());

        // Toggling re-appends at the tail, so contents (not order) and the
        // primary are what round-trip.
        let selection_after: HashSet<_> = editor.selected_ids().iter().cloned().collect();
        prop_assert_eq!(selection_after, selection_before);
        prop_assert_eq!(editor.selected_ids().first().cloned(), primary_before);
        let highlights_after: Vec<bool> =
            ids.iter().map(|id| host.is_highlighted(id)).collect();
        prop_assert_eq!(highlights_after, highlights_before);
    }

    /// A plain click always collapses the selection to exactly the clicked
    /// id, whatever came before.
    #[test]
    fn prop_plain_click_collapses_selection(
        count in 1usize..8,
        clicks in prop::collection::vec((0usize..8, any::<bool>()), 0..10),
        last in 0usize..8,
    ) {
        prop_assume!(last < count);

        let mut editor = SceneEditor::new();
        let mut ui = RecordingUi::new();
        let mut host = RecordingHost::new();
        let ids: Vec<_> = (0..count)
            .map(|_| add_box(&mut editor, &mut ui, &mut host))
            .collect();

        for (idx, shift) in clicks {
            let idx = idx % count;
            let modifiers = if shift {
                InputModifiers::shift()
            } else {
                InputModifiers::none()
            };
            editor.primitive_selected(&mut ui, &mut host, MODE, &ids[idx], modifiers);
        }

        editor.primitive_selected(&mut ui, &mut host, MODE, &ids[last], InputModifiers::none());
        prop_assert_eq!(editor.selected_ids(), &[ids[last].clone()]);
        prop_assert_eq!(editor.current_id(), Some(&ids[last]));
    }
}
