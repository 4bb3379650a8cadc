use anyhow::Context;
use sqlx::{FromRow, SqlitePool};

use super::status::PickupStatus;

#[derive(Debug, FromRow)]
struct PickupRow {
    id: i64,
    user_id: i64,
    name: String,
    email: String,
    address: String,
    item: String,
    date: String,
    status: String,
}

#[derive(Debug, Clone)]
pub struct Pickup {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub item: String,
    pub date: String, // ISO date as submitted, not parsed
    pub status: PickupStatus,
}

impl TryFrom<PickupRow> for Pickup {
    type Error = anyhow::Error;

    fn try_from(r: PickupRow) -> anyhow::Result<Self> {
        let status = r
            .status
            .parse()
            .with_context(|| format!("pickup {} has corrupt status", r.id))?;
        Ok(Self {
            id: r.id,
            user_id: r.user_id,
            name: r.name,
            email: r.email,
            address: r.address,
            item: r.item,
            date: r.date,
            status,
        })
    }
}

/// Contact details submitted with the schedule form, already trimmed.
#[derive(Debug, Clone, Default)]
pub struct NewPickup {
    pub name: String,
    pub email: String,
    pub address: String,
    pub item: String,
    pub date: String,
}

const COLUMNS: &str = "id, user_id, name, email, address, item, date, status";

fn into_pickups(rows: Vec<PickupRow>) -> anyhow::Result<Vec<Pickup>> {
    rows.into_iter().map(Pickup::try_from).collect()
}

/// Inserts a pickup owned by `user_id`, always starting as Scheduled.
pub async fn create(db: &SqlitePool, user_id: i64, new: &NewPickup) -> anyhow::Result<Pickup> {
    let row = sqlx::query_as::<_, PickupRow>(&format!(
        r#"
        INSERT INTO pickups (user_id, name, email, address, item, date, status)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.address)
    .bind(&new.item)
    .bind(&new.date)
    .bind(PickupStatus::Scheduled.as_str())
    .fetch_one(db)
    .await
    .context("insert pickup")?;
    row.try_into()
}

pub async fn find(db: &SqlitePool, id: i64) -> anyhow::Result<Option<Pickup>> {
    let row = sqlx::query_as::<_, PickupRow>(&format!(
        "SELECT {COLUMNS} FROM pickups WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(db)
    .await
    .context("find pickup")?;
    row.map(Pickup::try_from).transpose()
}

/// Every pickup, newest first.
pub async fn list_all(db: &SqlitePool) -> anyhow::Result<Vec<Pickup>> {
    let rows = sqlx::query_as::<_, PickupRow>(&format!(
        "SELECT {COLUMNS} FROM pickups ORDER BY id DESC"
    ))
    .fetch_all(db)
    .await
    .context("list pickups")?;
    into_pickups(rows)
}

pub async fn list_by_user(db: &SqlitePool, user_id: i64) -> anyhow::Result<Vec<Pickup>> {
    let rows = sqlx::query_as::<_, PickupRow>(&format!(
        "SELECT {COLUMNS} FROM pickups WHERE user_id = ? ORDER BY id DESC"
    ))
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("list pickups by user")?;
    into_pickups(rows)
}

/// Returns false when no pickup has `id`.
pub async fn update_status(db: &SqlitePool, id: i64, status: PickupStatus) -> anyhow::Result<bool> {
    let res = sqlx::query("UPDATE pickups SET status = ? WHERE id = ?")
        .bind(status.as_str())
        .bind(id)
        .execute(db)
        .await
        .context("update pickup status")?;
    Ok(res.rows_affected() > 0)
}
