//! Property-based tests for edit/undo/redo symmetry and the line-count floor.

use core_actions::TextEditor;
use core_text::Position;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    InsertChar(char),
    InsertText(String),
    Newline,
    DeleteLeft,
    DeleteRight,
    DeleteWordForward,
    DeleteWordBackward,
    KillToEnd,
    KillToStart,
    Cut,
    ReplaceAll(String, String),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z ]".prop_map(|s| Op::InsertChar(s.chars().next().unwrap_or('a'))),
        "[a-z\n]{1,6}".prop_map(Op::InsertText),
        Just(Op::Newline),
        Just(Op::DeleteLeft),
        Just(Op::DeleteRight),
        Just(Op::DeleteWordForward),
        Just(Op::DeleteWordBackward),
        Just(Op::KillToEnd),
        Just(Op::KillToStart),
        Just(Op::Cut),
        ("[a-c]{1,2}", "[x-z]{0,3}").prop_map(|(f, r)| Op::ReplaceAll(f, r)),
    ]
}

fn apply(ed: &mut TextEditor, op: &Op) -> bool {
    match op {
        Op::InsertChar(c) => ed.insert_char(*c),
        Op::InsertText(t) => ed.insert_text(t),
        Op::Newline => ed.newline(),
        Op::DeleteLeft => ed.delete_left(),
        Op::DeleteRight => ed.delete_right(),
        Op::DeleteWordForward => ed.delete_word_forward(),
        Op::DeleteWordBackward => ed.delete_word_backward(),
        Op::KillToEnd => ed.kill_to_end(),
        Op::KillToStart => ed.kill_to_start(),
        Op::Cut => ed.cut(),
        Op::ReplaceAll(f, r) => ed.replace_all(f, r),
    }
}

#[derive(Debug, Clone)]
enum Step {
    Edit(usize, usize, usize, Op),
    Undo,
    Redo,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (0usize..6, 0usize..8, 0usize..3, op())
            .prop_map(|(row, col, grow, op)| Step::Edit(row, col, grow, op)),
        1 => Just(Step::Undo),
        1 => Just(Step::Redo),
    ]
}

/// Place the cursor and optionally grow a selection from it.
fn position(ed: &mut TextEditor, row: usize, col: usize, grow_right: usize, grow_down: bool) {
    ed.set_cursor(Position::new(row, col));
    for _ in 0..grow_right {
        ed.move_right(true);
    }
    if grow_down {
        ed.move_down(true);
    }
}

proptest! {
    // apply(op); undo(); redo() lands on the exact post-op buffer and cursor,
    // and undo alone restores the loaded text.
    #[test]
    fn single_edit_undo_redo_symmetry(
        text in "[a-c \n]{0,24}",
        row in 0usize..6,
        col in 0usize..8,
        grow_right in 0usize..4,
        grow_down in any::<bool>(),
        op in op(),
    ) {
        let mut ed = TextEditor::with_text(&text);
        position(&mut ed, row, col, grow_right, grow_down);
        let original = ed.text();
        if !apply(&mut ed, &op) {
            return Ok(());
        }
        let after_text = ed.text();
        let after_cursor = ed.cursor();
        if ed.undo() {
            prop_assert_eq!(ed.text(), original);
            prop_assert!(ed.redo());
            prop_assert_eq!(ed.text(), after_text);
            prop_assert_eq!(ed.cursor(), after_cursor);
        } else {
            // only a replace-all that rewrote nothing records no history
            prop_assert_eq!(after_text, original);
        }
    }

    // Any edit sequence keeps at least one line, and undoing everything
    // returns to the loaded text.
    #[test]
    fn edit_sequence_unwinds_to_load(
        text in "[a-c \n]{0,24}",
        steps in prop::collection::vec((0usize..6, 0usize..8, 0usize..3, op()), 1..12),
    ) {
        let mut ed = TextEditor::with_text(&text);
        let loaded = ed.text();
        for (row, col, grow, op) in &steps {
            position(&mut ed, *row, *col, *grow, false);
            apply(&mut ed, op);
            prop_assert!(ed.line_count() >= 1);
        }
        let edited = ed.text();
        while ed.undo() {}
        prop_assert_eq!(ed.text(), loaded);
        prop_assert!(!ed.is_dirty());
        while ed.redo() {}
        prop_assert_eq!(ed.text(), edited);
    }

    // Edits interleaved with undo/redo follow a stack of buffer states: undo
    // either steps back one state or replays a snapshot that leaves the text
    // alone, and redo lands on the next state's text and cursor.
    #[test]
    fn interleaved_undo_redo_follows_state_stack(
        text in "[a-c \n]{0,24}",
        steps in prop::collection::vec(step(), 1..32),
    ) {
        let mut ed = TextEditor::with_text(&text);
        // Text and cursor after each text-changing edit; 0 is the load.
        let mut states = vec![(ed.text(), ed.cursor())];
        let mut at = 0usize;
        for step in &steps {
            let before = ed.text();
            match step {
                Step::Edit(row, col, grow, op) => {
                    position(&mut ed, *row, *col, *grow, false);
                    if !apply(&mut ed, op) {
                        continue;
                    }
                    let after = ed.text();
                    // a replace-all that rewrote nothing leaves history untouched
                    if matches!(op, Op::ReplaceAll(..)) && after == before {
                        continue;
                    }
                    states.truncate(at + 1);
                    if after != before {
                        states.push((after, ed.cursor()));
                        at += 1;
                    }
                }
                Step::Undo => {
                    if ed.undo() && at > 0 && ed.text() == states[at - 1].0 {
                        at -= 1;
                    }
                }
                Step::Redo => {
                    if ed.redo() && at + 1 < states.len() && ed.text() == states[at + 1].0 {
                        at += 1;
                        prop_assert_eq!(ed.cursor(), states[at].1);
                    }
                }
            }
            prop_assert_eq!(ed.text(), states[at].0.clone());
            prop_assert!(ed.line_count() >= 1);
        }
    }
}
