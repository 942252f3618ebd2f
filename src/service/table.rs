//! Results table rendering.
//!
//! Renders the participant standings as a box-drawn table inside a Discord code
//! block so the monospaced layout survives. The table is rebuilt from scratch
//! on every call; nothing about it is stored between renders.
//!
//! ```text
//! RESULTS FOR Moonman ADDED......
//! ┏━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━━━━━━━━━━━┓
//! ┃        Name         ┃      Amount      ┃
//! ┣━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━━━━━━━━━┫
//! ┃       Moonman       ┃      70000       ┃
//! ┃        Tank         ┃        -         ┃
//! ┗━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━━━━━━━━━━━┛
//! ```

use unicode_width::UnicodeWidthStr;

use crate::model::participant::Participant;

/// Blank cells added to the widest content of each column.
pub const COLUMN_PADDING: usize = 12;

/// Longest message content Discord accepts, in characters.
pub const MESSAGE_LIMIT: usize = 2000;

const NAME_HEADER: &str = "Name";
const AMOUNT_HEADER: &str = "Amount";
/// Amount shown for participants who have not rolled yet.
const PENDING_ROLL: &str = "-";

const CODE_FENCE: &str = "```";
const HORIZONTAL: char = '━';
const VERTICAL: char = '┃';

/// Renders the standings table.
///
/// Rows are ordered by roll, highest first. The sort is stable, so equal rolls
/// and participants still waiting to roll keep their opt-in order, with the
/// waiting participants listed after everyone who has rolled.
///
/// The result never exceeds `MESSAGE_LIMIT`. When the full table would, rows
/// are dropped from the bottom and replaced by a single `+N more` row.
///
/// # Arguments
/// - `title` - Status line shown above the table
/// - `participants` - Participants in opt-in order
/// - `wager` - Game wager, used to size the amount column for any possible roll
///
/// # Returns
/// - `String` - Title and table wrapped in a code block, ready to post
pub fn render_table(title: &str, participants: &[Participant], wager: i64) -> String {
    let rows: Vec<[String; 2]> = standings(participants)
        .into_iter()
        .map(|p| [p.player.name.clone(), amount_cell(p)])
        .collect();
    let widths = column_widths(participants, wager);

    let full = layout(title, &rows, &widths, 0);
    if fits(&full) {
        return full;
    }

    (1..=rows.len())
        .map(|hidden| layout(title, &rows[..rows.len() - hidden], &widths, hidden))
        .find(|rendered| fits(rendered))
        .unwrap_or_else(|| layout(title, &[], &widths, rows.len()))
}

/// Computes the `[name, amount]` column widths for a render.
///
/// Each width is the widest content in the column (header included) plus
/// `COLUMN_PADDING`. Widths are display columns, so wide characters count
/// twice.
pub fn column_widths(participants: &[Participant], wager: i64) -> [usize; 2] {
    let name = participants
        .iter()
        .map(|p| text_width(&p.player.name))
        .chain([text_width(NAME_HEADER)])
        .max()
        .unwrap_or(0);

    let amount = participants
        .iter()
        .map(|p| text_width(&amount_cell(p)))
        .chain([text_width(AMOUNT_HEADER), text_width(&wager.to_string())])
        .max()
        .unwrap_or(0);

    [name + COLUMN_PADDING, amount + COLUMN_PADDING]
}

fn layout(title: &str, rows: &[[String; 2]], widths: &[usize], hidden: usize) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 5);
    lines.push(border('┏', '┳', '┓', widths));
    lines.push(row_line(&[NAME_HEADER, AMOUNT_HEADER], widths));
    lines.push(border('┣', '╋', '┫', widths));
    for row in rows {
        lines.push(row_line(&[row[0].as_str(), row[1].as_str()], widths));
    }
    if hidden > 0 {
        let more = format!("+{hidden} more");
        lines.push(row_line(&[more.as_str(), ""], widths));
    }
    lines.push(border('┗', '┻', '┛', widths));

    format!("{CODE_FENCE}\n{title}\n{}\n{CODE_FENCE}", lines.join("\n"))
}

fn fits(rendered: &str) -> bool {
    rendered.chars().count() <= MESSAGE_LIMIT
}

fn standings(participants: &[Participant]) -> Vec<&Participant> {
    let mut standings: Vec<&Participant> = participants.iter().collect();
    // `None` orders below every roll, so waiting participants sink to the bottom
    standings.sort_by(|a, b| b.roll().cmp(&a.roll()));
    standings
}

fn amount_cell(participant: &Participant) -> String {
    participant
        .roll()
        .map_or_else(|| PENDING_ROLL.to_string(), |roll| roll.to_string())
}

fn text_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Centers `content` in `width` cells; an odd leftover cell goes on the right.
fn center(content: &str, width: usize) -> String {
    let spare = width.saturating_sub(text_width(content));
    let left = spare / 2;
    let right = spare - left;

    format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
}

fn border(left: char, junction: char, right: char, widths: &[usize]) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| HORIZONTAL.to_string().repeat(*w))
        .collect();

    format!("{left}{}{right}", segments.join(&junction.to_string()))
}

fn row_line(cells: &[&str], widths: &[usize]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| center(cell, *width))
        .collect();

    format!("{VERTICAL}{}{VERTICAL}", cells.join(&VERTICAL.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::player::Player;

    fn participant(id: u64, name: &str, roll: Option<i64>) -> Participant {
        let mut participant = Participant::new(Player::new(id, name));
        if let Some(roll) = roll {
            participant.record_roll(roll).unwrap();
        }
        participant
    }

    /// Table body lines, without the code fences and title.
    fn table_lines(rendered: &str) -> Vec<&str> {
        let lines: Vec<&str> = rendered.lines().collect();
        lines[2..lines.len() - 1].to_vec()
    }

    fn row_names(rendered: &str) -> Vec<String> {
        let lines = table_lines(rendered);
        lines[3..lines.len() - 1]
            .iter()
            .map(|line| {
                line.trim_matches(VERTICAL)
                    .split(VERTICAL)
                    .next()
                    .unwrap()
                    .trim()
                    .to_string()
            })
            .collect()
    }

    /// Tests the overall framing of a render.
    ///
    /// Expected: code fences around the title line and table
    #[test]
    fn wraps_title_and_table_in_code_block() {
        let rendered = render_table("GENERATING TABLE", &[participant(1, "A", None)], 100_000);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "```");
        assert_eq!(lines[1], "GENERATING TABLE");
        assert!(lines[2].starts_with('┏'));
        assert!(lines[lines.len() - 2].starts_with('┗'));
        assert_eq!(lines[lines.len() - 1], "```");
    }

    /// Tests that every table line has the same width.
    ///
    /// Expected: borders, header, divider and rows all share one character count,
    /// including names whose padding leaves an odd leftover cell
    #[test]
    fn lines_are_aligned() {
        let participants = vec![
            participant(1, "Moonman", Some(70_000)),
            participant(2, "Tank", None),
            participant(3, "Odd", Some(5)),
        ];

        let rendered = render_table("title", &participants, 100_000);
        let widths: Vec<usize> = table_lines(&rendered)
            .iter()
            .map(|line| line.chars().count())
            .collect();

        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
    }

    /// Tests that column widths always cover their widest content.
    ///
    /// Expected: name and amount widths are content + padding and at least the headers
    #[test]
    fn column_widths_cover_content() {
        let participants = vec![
            participant(1, "A", Some(3)),
            participant(2, "A much longer display name", Some(99_999)),
        ];

        let [name, amount] = column_widths(&participants, 100_000);

        assert_eq!(name, "A much longer display name".len() + COLUMN_PADDING);
        assert_eq!(amount, "100000".len() + COLUMN_PADDING);

        let [name, amount] = column_widths(&[], 5);
        assert_eq!(name, NAME_HEADER.len() + COLUMN_PADDING);
        assert_eq!(amount, AMOUNT_HEADER.len() + COLUMN_PADDING);
    }

    #[test]
    fn accented_names_take_one_column_per_letter() {
        let participants = vec![participant(1, "Zoë", Some(1))];

        let [name, _] = column_widths(&participants, 10);

        assert_eq!(name, NAME_HEADER.len() + COLUMN_PADDING);
    }

    /// Tests names made of double-width characters.
    ///
    /// Expected: each CJK character counts as two columns, and every table line
    /// still spans the same number of display columns
    #[test]
    fn wide_names_keep_the_box_aligned() {
        let participants = vec![
            participant(1, "王小明", Some(500)),
            participant(2, "Tank", Some(20)),
        ];

        let [name, _] = column_widths(&participants, 1_000);
        assert_eq!(name, 6 + COLUMN_PADDING);

        let rendered = render_table("t", &participants, 1_000);
        let widths: Vec<usize> = table_lines(&rendered)
            .iter()
            .map(|line| UnicodeWidthStr::width(*line))
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
    }

    #[test]
    fn small_tables_show_every_row() {
        let participants: Vec<Participant> = (0..5)
            .map(|i| participant(i, &format!("Player {i}"), Some(i as i64)))
            .collect();

        let rendered = render_table("t", &participants, 100);

        assert_eq!(row_names(&rendered).len(), 5);
        assert!(!rendered.contains("more"));
    }

    /// Tests a game too large to fit in one Discord message.
    ///
    /// Expected: output within the message limit, highest rolls kept, and a
    /// final row counting the participants left out
    #[test]
    fn large_tables_are_cut_to_the_message_limit() {
        let participants: Vec<Participant> = (0..100)
            .map(|i| participant(i, &format!("Player {i:03}"), Some(i as i64)))
            .collect();

        let rendered = render_table("RESULTS FOR Player 099 ADDED......", &participants, 100_000);

        assert!(rendered.chars().count() <= MESSAGE_LIMIT);

        let names = row_names(&rendered);
        let shown = names.len() - 1;
        assert!(shown > 0 && shown < 100);
        assert_eq!(names[0], "Player 099");
        assert_eq!(names[shown], format!("+{} more", 100 - shown));

        // One more row would not have fit
        let one_more = layout(
            "RESULTS FOR Player 099 ADDED......",
            &standings(&participants)
                .into_iter()
                .take(shown + 1)
                .map(|p| [p.player.name.clone(), amount_cell(p)])
                .collect::<Vec<_>>(),
            &column_widths(&participants, 100_000),
            100 - shown - 1,
        );
        assert!(!fits(&one_more));
    }

    /// Tests row ordering by roll.
    ///
    /// Expected: highest roll first, regardless of opt-in order
    #[test]
    fn sorts_by_roll_descending() {
        let participants = vec![
            participant(1, "Low", Some(10)),
            participant(2, "High", Some(90)),
            participant(3, "Mid", Some(50)),
        ];

        let rendered = render_table("t", &participants, 100);

        assert_eq!(row_names(&rendered), vec!["High", "Mid", "Low"]);
    }

    /// Tests ordering before and during the reveal.
    ///
    /// Expected: waiting participants keep opt-in order below those who rolled
    #[test]
    fn pending_rows_keep_opt_in_order() {
        let pending = vec![
            participant(1, "C", None),
            participant(2, "A", None),
            participant(3, "B", None),
        ];
        assert_eq!(row_names(&render_table("t", &pending, 100)), vec!["C", "A", "B"]);

        let partial = vec![
            participant(1, "C", None),
            participant(2, "A", Some(0)),
            participant(3, "B", None),
        ];
        assert_eq!(row_names(&render_table("t", &partial, 100)), vec!["A", "C", "B"]);
    }

    #[test]
    fn equal_rolls_keep_opt_in_order() {
        let participants = vec![
            participant(1, "First", Some(40)),
            participant(2, "Second", Some(40)),
        ];

        let rendered = render_table("t", &participants, 100);

        assert_eq!(row_names(&rendered), vec!["First", "Second"]);
    }

    #[test]
    fn pending_roll_shows_placeholder() {
        let rendered = render_table("t", &[participant(1, "A", None)], 100);
        let lines = table_lines(&rendered);
        let amount = lines[3]
            .trim_matches(VERTICAL)
            .split(VERTICAL)
            .nth(1)
            .unwrap()
            .trim();

        assert_eq!(amount, PENDING_ROLL);
    }

    #[test]
    fn center_puts_odd_cell_on_the_right() {
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("toolong", 3), "toolong");
    }
}
