//! Render game positions to SVG.
//!
//! Usage:
//!   # Final position of a move sequence (cell ids, White first)
//!   cargo run --release --bin render -- --moves "30 31 22" -o board.svg
//!
//!   # One frame per move
//!   cargo run --release --bin render -- --game "30 31 22 40" --output-dir ./frames/
//!
//!   # Text board on stdout
//!   cargo run --release --bin render -- --moves "30 31 22" --text

use std::env;
use std::fs;

use yavalath_core::{CellId, Game, MoveOutcome, Player, Topology};

// ============================================================================
// Constants
// ============================================================================

/// Hex circumradius.
const HEX_RADIUS: f32 = 28.0;
const HEX_GAP: f32 = 3.0;
const IMAGE_PADDING: f32 = 16.0;
const STONE_RADIUS: f32 = 17.0;
const LABEL_SIZE: f32 = 10.0;

const BG_COLOR: &str = "#1a1a1a";
const CELL_BG: &str = "#c9a86b";
const CELL_STROKE: &str = "#8a6d3b";
const WHITE_STONE: &str = "#f5f5f5";
const BLACK_STONE: &str = "#222222";
const LABEL_COLOR: &str = "#5a4526";

const HIGHLIGHT_LAST_MOVE: &str = "#f39c12";
const HIGHLIGHT_LINE: &str = "#e74c3c";

// ============================================================================
// Move replay
// ============================================================================

/// Parse cell ids separated by whitespace or commas.
fn parse_moves(s: &str) -> Vec<CellId> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .filter_map(|t| match t.parse::<u8>() {
            Ok(id) => Some(CellId(id)),
            Err(_) => {
                eprintln!("Skipping unparseable move: {}", t);
                None
            }
        })
        .collect()
}

/// Replay moves, reporting rejected ones. Returns the outcome of each accepted move.
fn replay(game: &mut Game, moves: &[CellId]) -> Vec<MoveOutcome> {
    let mut outcomes = Vec::new();
    for &id in moves {
        match game.submit_move(id) {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => eprintln!("Move {} rejected: {}", id, e),
        }
    }
    outcomes
}

// ============================================================================
// SVG generation
// ============================================================================

/// Horizontal position of a cell in hex-width units.
fn hex_x(row: i16, col: i16) -> f32 {
    col as f32 + row as f32 * 0.5
}

fn hex_points(cx: f32, cy: f32, r: f32) -> String {
    (0..6)
        .map(|i| {
            let angle = std::f32::consts::PI / 180.0 * (60.0 * i as f32 - 30.0);
            format!("{:.1},{:.1}", cx + r * angle.cos(), cy + r * angle.sin())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate SVG for the current position of a game
fn render_game_svg(game: &Game, last: Option<&MoveOutcome>, show_labels: bool) -> String {
    let topology: &Topology = game.topology();
    let board = game.board();

    let hex_w = 3f32.sqrt() * HEX_RADIUS;
    let coords: Vec<_> = topology
        .cells()
        .filter_map(|id| topology.id_to_coordinate(id).map(|c| (id, c)))
        .collect();
    let min_x = coords
        .iter()
        .map(|(_, c)| hex_x(c.row, c.col))
        .fold(f32::INFINITY, f32::min);
    let max_x = coords
        .iter()
        .map(|(_, c)| hex_x(c.row, c.col))
        .fold(f32::NEG_INFINITY, f32::max);

    let width = (max_x - min_x) * hex_w + hex_w + 2.0 * IMAGE_PADDING;
    let height = (topology.rows().max(1) - 1) as f32 * 1.5 * HEX_RADIUS
        + 2.0 * HEX_RADIUS
        + 2.0 * IMAGE_PADDING;

    let line: &[CellId] = last.map(|o| o.line.as_slice()).unwrap_or(&[]);

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
        width, height, width, height
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"  <rect width="{:.0}" height="{:.0}" fill="{}"/>"#,
        width, height, BG_COLOR
    ));
    svg.push('\n');

    for (id, coord) in &coords {
        let cx = IMAGE_PADDING + hex_w / 2.0 + (hex_x(coord.row, coord.col) - min_x) * hex_w;
        let cy = IMAGE_PADDING + HEX_RADIUS + coord.row as f32 * 1.5 * HEX_RADIUS;

        let stroke = if line.contains(id) {
            HIGHLIGHT_LINE
        } else if last.map(|o| o.cell) == Some(*id) {
            HIGHLIGHT_LAST_MOVE
        } else {
            CELL_STROKE
        };
        svg.push_str(&format!(
            r#"  <polygon points="{}" fill="{}" stroke="{}" stroke-width="2"/>"#,
            hex_points(cx, cy, HEX_RADIUS - HEX_GAP),
            CELL_BG,
            stroke
        ));
        svg.push('\n');

        match board.occupant_at(*id) {
            Ok(Some(player)) => {
                let fill = match player {
                    Player::White => WHITE_STONE,
                    Player::Black => BLACK_STONE,
                };
                svg.push_str(&format!(
                    r#"  <circle cx="{:.1}" cy="{:.1}" r="{}" fill="{}"/>"#,
                    cx, cy, STONE_RADIUS, fill
                ));
                svg.push('\n');
            }
            _ if show_labels => {
                svg.push_str(&format!(
                    r#"  <text x="{:.1}" y="{:.1}" font-size="{}" fill="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                    cx, cy, LABEL_SIZE, LABEL_COLOR, id
                ));
                svg.push('\n');
            }
            _ => {}
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn print_usage() {
    eprintln!("Usage: render [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --moves <IDS>        Render the final position of a move sequence");
    eprintln!("  --game <IDS>         Render one frame per move into --output-dir");
    eprintln!("  -o, --output <FILE>  Output file (default: board.svg)");
    eprintln!("  --output-dir <DIR>   Output directory for --game (default: .)");
    eprintln!("  --labels             Show cell ids on empty cells");
    eprintln!("  --text               Print a text board instead of writing SVG");
    eprintln!("  -h, --help           Show this help");
}

fn write_or_exit(path: &str, svg: &str) {
    if let Err(e) = fs::write(path, svg) {
        eprintln!("Failed to write {}: {}", path, e);
        std::process::exit(1);
    }
    println!("Wrote {}", path);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let mut moves_str: Option<String> = None;
    let mut game_str: Option<String> = None;
    let mut output: Option<String> = None;
    let mut output_dir: Option<String> = None;
    let mut show_labels = false;
    let mut text = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--moves" => {
                i += 1;
                moves_str = Some(args.get(i).cloned().unwrap_or_default());
            }
            "--game" => {
                i += 1;
                game_str = Some(args.get(i).cloned().unwrap_or_default());
            }
            "-o" | "--output" => {
                i += 1;
                output = args.get(i).cloned();
            }
            "--output-dir" => {
                i += 1;
                output_dir = args.get(i).cloned();
            }
            "--labels" => show_labels = true,
            "--text" => text = true,
            "-h" | "--help" => {
                print_usage();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Batch mode: one frame per accepted move
    if let Some(moves) = game_str {
        let dir = output_dir.unwrap_or_else(|| ".".to_string());
        if let Err(e) = fs::create_dir_all(&dir) {
            eprintln!("Failed to create {}: {}", dir, e);
            std::process::exit(1);
        }

        let mut game = Game::new();
        write_or_exit(&format!("{}/move-00.svg", dir), &render_game_svg(&game, None, show_labels));

        let mut frames = 0;
        for id in parse_moves(&moves) {
            let outcome = match game.submit_move(id) {
                Ok(outcome) => outcome,
                Err(e) => {
                    eprintln!("Move {} rejected: {}", id, e);
                    continue;
                }
            };
            frames += 1;
            let svg = render_game_svg(&game, Some(&outcome), show_labels);
            write_or_exit(&format!("{}/move-{:02}.svg", dir, frames), &svg);
        }

        println!("\nRendered {} frames", frames + 1);
        if let Some(winner) = game.winner() {
            println!("Winner: {}", winner);
        }
        return;
    }

    // Single position mode
    let Some(moves) = moves_str else {
        eprintln!("Error: specify --moves or --game");
        print_usage();
        std::process::exit(1);
    };

    let mut game = Game::new();
    let outcomes = replay(&mut game, &parse_moves(&moves));

    if text {
        print!("{}", game.board().render(game.topology()));
    } else {
        let svg = render_game_svg(&game, outcomes.last(), show_labels);
        let out_path = output.unwrap_or_else(|| "board.svg".to_string());
        write_or_exit(&out_path, &svg);
    }

    match game.winner() {
        Some(winner) => println!("Winner: {}", winner),
        None => println!("To move: {}", game.current_player()),
    }
}
