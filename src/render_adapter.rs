use serde_json::{json, Value};

use crate::bingo_engine::models::{BingoDeck, Board, WordEntry};

/// Turns generated boards and the reading script into something printable.
///
/// Page layout, fonts and file output belong to implementors; the engine only
/// guarantees every board holds `size * size` words and every pool word
/// appears in the script exactly once.
pub trait DeckRenderer {
    type Output;

    fn render(&self, boards: &[Board], script: &[WordEntry]) -> Self::Output;

    fn render_deck(&self, deck: &BingoDeck) -> Self::Output {
        self.render(&deck.boards, &deck.script)
    }
}

// ---------------------------------------------------------------------------
// JSON payload
// ---------------------------------------------------------------------------

/// Renders into the JSON document a page-layout service consumes.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

/// One board as `{ player, size, rows: [[word, ...], ...] }`.
fn board_json(player: usize, board: &Board) -> Value {
    let rows: Vec<Value> = board.rows().map(|row| json!(row)).collect();
    json!({
        "player": player,
        "size": board.size,
        "rows": rows,
    })
}

/// One script entry with its 1-based turn and the ready-to-print line.
fn script_json(turn: usize, entry: &WordEntry) -> Value {
    json!({
        "turn": turn,
        "word": entry.word,
        "description": entry.description,
        "line": entry.script_line(turn),
    })
}

impl DeckRenderer for JsonRenderer {
    type Output = Value;

    fn render(&self, boards: &[Board], script: &[WordEntry]) -> Value {
        let boards: Vec<Value> = boards
            .iter()
            .enumerate()
            .map(|(i, b)| board_json(i + 1, b))
            .collect();
        let script: Vec<Value> = script
            .iter()
            .enumerate()
            .map(|(i, e)| script_json(i + 1, e))
            .collect();

        json!({
            "boards": boards,
            "script": script,
        })
    }
}

// ---------------------------------------------------------------------------
// Plain text
// ---------------------------------------------------------------------------

/// Renders boards as ASCII grids followed by the numbered reading script.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

/// Pad to `width` characters (not bytes, vocabularies are rarely ASCII).
fn pad(word: &str, width: usize) -> String {
    let len = word.chars().count();
    format!("{}{}", word, " ".repeat(width.saturating_sub(len)))
}

fn board_text(player: usize, board: &Board) -> String {
    let width = board.words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
    let border = format!(
        "+{}",
        format!("{}+", "-".repeat(width + 2)).repeat(board.size)
    );

    let mut out = format!("Player {}\n{}\n", player, border);
    for row in board.rows() {
        let cells: Vec<String> = row.iter().map(|w| format!(" {} |", pad(w, width))).collect();
        out.push('|');
        out.push_str(&cells.concat());
        out.push('\n');
        out.push_str(&border);
        out.push('\n');
    }
    out
}

impl DeckRenderer for TextRenderer {
    type Output = String;

    fn render(&self, boards: &[Board], script: &[WordEntry]) -> String {
        let mut out = String::new();
        for (i, board) in boards.iter().enumerate() {
            out.push_str(&board_text(i + 1, board));
            out.push('\n');
        }
        out.push_str("Reading order:\n");
        for (i, entry) in script.iter().enumerate() {
            out.push_str(&entry.script_line(i + 1));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board {
            size: 2,
            words: vec!["my".into(), "ono".into(), "prvý".into(), "ňou".into()],
        }
    }

    fn script() -> Vec<WordEntry> {
        vec![
            WordEntry::new("ono", "pronoun, neuter"),
            WordEntry::new("my", "pronoun, plural"),
        ]
    }

    #[test]
    fn json_has_grids_and_numbered_script() {
        let v = JsonRenderer.render(&[board()], &script());
        assert_eq!(v["boards"][0]["player"], 1);
        assert_eq!(v["boards"][0]["rows"][1][0], "prvý");
        assert_eq!(v["script"][1]["turn"], 2);
        assert_eq!(v["script"][0]["line"], "1. pronoun, neuter [ono]");
    }

    #[test]
    fn text_grid_lines_have_equal_width() {
        let text = TextRenderer.render(&[board()], &script());
        let grid: Vec<&str> = text
            .lines()
            .skip(1)
            .take_while(|l| l.starts_with('+') || l.starts_with('|'))
            .collect();
        assert_eq!(grid.len(), 5);
        let widths: Vec<usize> = grid.iter().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{text}");
        assert!(text.contains("2. pronoun, plural [my]"));
    }
}
