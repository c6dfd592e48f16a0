//! Rendering of listings, status and action reports into chat-sized chunks.
//!
//! Every chunk returned from this module is at most [`MAX_CHUNK_LEN`]
//! characters, page label included.

use super::actions::{Action, ActionOutcome};
use super::models::ServerRecord;
use tracing::warn;

pub const MAX_CHUNK_LEN: usize = 1900;
const NOT_AVAILABLE: &str = "N/A";

const LISTING_HEADER: &str = "**🎮 Available Servers:**\n\n";
const STATUS_HEADER: &str = "**🟢 Running Servers:**\n\n";
const AMBIGUOUS_HEADER: &str = "❓ Multiple servers found. Please be more specific:\n";

pub const NO_SERVERS: &str = "No servers found.";
pub const NONE_RUNNING: &str = "🔴 No servers are currently running.";

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// `connect host:port`, or `N/A` unless both halves are known.
pub fn connect_directive(server: &ServerRecord) -> String {
    match (&server.custom_domain, server.game_port) {
        (Some(domain), Some(port)) => format!("connect {}:{}", domain, port),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

fn listing_block(server: &ServerRecord) -> String {
    let status = if server.running {
        "🟢 Online"
    } else {
        "🔴 Offline"
    };
    format!(
        "**{}**\n• Status: {}\n• Players: {}/{}\n• Connect: `{}`\n• Location: {}\n\n",
        server.name,
        status,
        server.players_current,
        server.players_max,
        connect_directive(server),
        or_na(&server.location),
    )
}

fn status_block(server: &ServerRecord) -> String {
    format!(
        "**{}**\n• Players: {}/{}\n• Connect: `{}`\n• Map: {}\n\n",
        server.name,
        server.players_current,
        server.players_max,
        connect_directive(server),
        or_na(&server.map),
    )
}

fn page_label(page: usize, total: usize) -> String {
    format!("\nPage {}/{}", page, total)
}

/// Cuts a block that could never fit a chunk on its own.
fn fit_block(block: &str, budget: usize) -> String {
    let len = char_len(block);
    if len <= budget {
        return block.to_string();
    }

    warn!(
        "Block of {} characters exceeds the {} character chunk budget, truncating",
        len, budget
    );
    let mut cut: String = block.chars().take(budget.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Greedily packs `blocks` after `header`, sealing a chunk whenever the next
/// block would push it past `budget`.
fn pack(header: &str, blocks: &[String], budget: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = fit_block(header, budget);
    let mut blocks = blocks.iter();

    // the header never stands alone on a page
    if let Some(first) = blocks.next() {
        current = fit_block(&(current + first), budget);
    }

    for block in blocks {
        let block = fit_block(block, budget);
        if !current.is_empty() && char_len(&current) + char_len(&block) > budget {
            chunks.push(std::mem::take(&mut current));
        }
        current.push_str(&block);
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Packs blocks into chunks and labels them `Page i/total` when there is more
/// than one. Room for the label is reserved before labelling.
pub fn paginate(header: &str, blocks: &[String]) -> Vec<String> {
    let chunks = pack(header, blocks, MAX_CHUNK_LEN);
    if chunks.len() <= 1 {
        return chunks;
    }

    let mut total = chunks.len();
    loop {
        let reserve = char_len(&page_label(total, total));
        let chunks = pack(header, blocks, MAX_CHUNK_LEN - reserve);
        // more pages can mean a wider label; repack until it is stable
        if char_len(&page_label(chunks.len(), chunks.len())) <= reserve {
            let count = chunks.len();
            return chunks
                .into_iter()
                .enumerate()
                .map(|(i, chunk)| chunk + &page_label(i + 1, count))
                .collect();
        }
        total = chunks.len();
    }
}

pub fn listing(servers: &[ServerRecord]) -> Vec<String> {
    if servers.is_empty() {
        return vec![NO_SERVERS.to_string()];
    }
    let blocks = servers.iter().map(listing_block).collect::<Vec<_>>();
    paginate(LISTING_HEADER, &blocks)
}

pub fn status(servers: &[ServerRecord]) -> Vec<String> {
    let blocks = servers
        .iter()
        .filter(|s| s.running)
        .map(status_block)
        .collect::<Vec<_>>();
    if blocks.is_empty() {
        return vec![NONE_RUNNING.to_string()];
    }
    paginate(STATUS_HEADER, &blocks)
}

pub fn action_report(outcome: &ActionOutcome) -> String {
    let name = &outcome.server.name;
    let report = match (outcome.succeeded, &outcome.error) {
        (true, refresh_error) if outcome.action == Action::Start => {
            let mut report = format!(
                "✅ Server **{}** has been started!\n\n• Connect: `{}`",
                name,
                connect_directive(&outcome.server)
            );
            if let Some(e) = refresh_error {
                report.push_str(&format!("\n⚠️ Could not refresh connection details: {}", e));
            }
            report
        }
        (true, _) => format!(
            "✅ Server **{}** has been {}!",
            name,
            outcome.action.past_tense()
        ),
        (false, Some(e)) => format!(
            "❌ Error {} server **{}**: {}",
            outcome.action.progressive(),
            name,
            e
        ),
        (false, None) => format!("❌ Failed to {} server **{}**", outcome.action, name),
    };
    fit_block(&report, MAX_CHUNK_LEN)
}

pub fn not_found(query: &str) -> String {
    fit_block(
        &format!("❌ No server found with name: {}", query.trim()),
        MAX_CHUNK_LEN,
    )
}

pub fn ambiguous(candidates: &[ServerRecord]) -> Vec<String> {
    let lines = candidates
        .iter()
        .map(|s| format!("• {}\n", s.name))
        .collect::<Vec<_>>();
    paginate(AMBIGUOUS_HEADER, &lines)
        .into_iter()
        .map(|chunk| chunk.trim_end().to_string())
        .collect()
}

/// The one message a command sends when the provider could not be reached.
pub fn transport_failure(doing: &str, error: &dyn std::fmt::Display) -> String {
    fit_block(&format!("❌ Error {}: {}", doing, error), MAX_CHUNK_LEN)
}
