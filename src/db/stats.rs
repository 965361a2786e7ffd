use crate::core::calculator::global_counts;
use crate::core::roster::Roster;
use crate::db::pool::DbPool;
use crate::db::slots::slot_info;
use crate::errors::AppResult;
use crate::persistence::USERS_SLOT;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str, roster: &Roster) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) ROSTER SLOT
    //
    match slot_info(&pool.conn, USERS_SLOT)? {
        Some((bytes, updated_at)) => {
            println!(
                "{}• Slot '{}':{} {} bytes, last written {}",
                CYAN, USERS_SLOT, RESET, bytes, updated_at
            );
        }
        None => println!(
            "{}• Slot '{}':{} {GREY}never written{RESET}",
            CYAN, USERS_SLOT, RESET
        ),
    }

    //
    // 3) ROSTER CONTENT
    //
    let counts = global_counts(roster);
    println!(
        "{}• Employees:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        roster.len(),
        RESET
    );
    println!(
        "{}• Marks:{} {} (present {}, absent {})",
        CYAN,
        RESET,
        counts.total(),
        counts.present,
        counts.absent
    );

    //
    // 4) AUDIT LOG
    //
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log entries:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
