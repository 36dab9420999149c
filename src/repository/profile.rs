use chrono::{DateTime, Utc};
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::{
    core::sqlx_utils::{binds_query, binds_query_as, query_builder, SqlxBinds},
    model::profile::{ProfileInput, ProfilePatch, ProfileRow, TABLE_NAME},
};

const COLUMNS: &str = "id, document, created_at, updated_at";

pub async fn get_all_profile(tx: &mut Transaction<'_, Postgres>) -> anyhow::Result<Vec<ProfileRow>> {
    let stmt = query_builder(Some(COLUMNS), TABLE_NAME, &[], &[], None);
    let q = binds_query_as::<ProfileRow>(&stmt, vec![]);
    let data = q.fetch_all(&mut **tx).await?;
    Ok(data)
}

pub async fn count_profile(tx: &mut Transaction<'_, Postgres>) -> anyhow::Result<i64> {
    let stmt = query_builder(Some("count(id)"), TABLE_NAME, &[], &[], None);
    let q = binds_query_as::<(i64,)>(&stmt, vec![]);
    let count = q.fetch_one(&mut **tx).await?;
    Ok(count.0)
}

pub async fn get_profile_by_id(
    tx: &mut Transaction<'_, Postgres>,
    id: &str,
) -> anyhow::Result<Option<ProfileRow>> {
    let binds = vec![SqlxBinds::String(id.trim().to_string())];
    let filters = vec!["id = $1".to_string()];
    let stmt = query_builder(Some(COLUMNS), TABLE_NAME, &filters, &[], None);
    let q = binds_query_as::<ProfileRow>(&stmt, binds);
    let data = q.fetch_optional(&mut **tx).await?;
    Ok(data)
}

pub async fn create_profile(
    tx: &mut Transaction<'_, Postgres>,
    id: Option<String>,
    data: &ProfileInput,
    now: Option<DateTime<Utc>>,
) -> anyhow::Result<ProfileRow> {
    let now = now.unwrap_or(Utc::now());
    let id = id.unwrap_or(Uuid::now_v7().to_string());
    let stmt = format!(
        r#"
    INSERT INTO {} (id, document, created_at, updated_at)
    VALUES ($1, $2, $3, $4)
    RETURNING {}"#,
        TABLE_NAME, COLUMNS
    );
    let binds = vec![
        SqlxBinds::String(id),
        SqlxBinds::Json(serde_json::to_value(data)?),
        SqlxBinds::DateTimeUtc(now),
        SqlxBinds::DateTimeUtc(now),
    ];
    let row = binds_query_as::<ProfileRow>(&stmt, binds)
        .fetch_one(&mut **tx)
        .await?;
    Ok(row)
}

/// Merge `patch` into the stored document. Returns `None` when no row has `id`.
pub async fn update_profile(
    tx: &mut Transaction<'_, Postgres>,
    id: &str,
    patch: &ProfilePatch,
    now: Option<DateTime<Utc>>,
) -> anyhow::Result<Option<ProfileRow>> {
    let now = now.unwrap_or(Utc::now());
    let stmt = format!(
        r#"
        UPDATE {}
        SET document = document || $1, updated_at = $2
        WHERE id = $3
        RETURNING {}"#,
        TABLE_NAME, COLUMNS
    );
    let binds = vec![
        SqlxBinds::Json(patch.merge_document()?),
        SqlxBinds::DateTimeUtc(now),
        SqlxBinds::String(id.trim().to_string()),
    ];
    let row = binds_query_as::<ProfileRow>(&stmt, binds)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(row)
}

/// Hard delete. Returns the number of removed rows, 0 when already absent.
pub async fn delete_profile(tx: &mut Transaction<'_, Postgres>, id: &str) -> anyhow::Result<u64> {
    let stmt = format!("DELETE FROM {} WHERE id = $1", TABLE_NAME);
    let res = binds_query(&stmt, vec![SqlxBinds::String(id.trim().to_string())])
        .execute(&mut **tx)
        .await?;
    Ok(res.rows_affected())
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use super::*;
    use crate::model::profile::Coordinates;

    fn sample() -> ProfileInput {
        ProfileInput {
            name: "Amit Deshmukh".to_string(),
            title: "Data Scientist".to_string(),
            location: "Nagpur, Maharashtra".to_string(),
            coordinates: Coordinates {
                lat: 21.1458,
                lng: 79.0882,
            },
            description: "ML".to_string(),
            email: "amit@example.com".to_string(),
            phone: "1".to_string(),
            interests: vec!["Python".to_string()],
            bio: "bio".to_string(),
            ..Default::default()
        }
    }

    #[sqlx::test]
    #[ignore = "requires a postgres DATABASE_URL"]
    async fn test_create_and_get_profile(pool: PgPool) -> anyhow::Result<()> {
        let mut tx = pool.begin().await?;
        let created = create_profile(&mut tx, None, &sample(), None).await?;
        let fetched = get_profile_by_id(&mut tx, &created.id).await?;
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().document.0, sample());
        assert_eq!(count_profile(&mut tx).await?, 1);
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a postgres DATABASE_URL"]
    async fn test_update_profile_merges_document(pool: PgPool) -> anyhow::Result<()> {
        let mut tx = pool.begin().await?;
        let created = create_profile(&mut tx, None, &sample(), None).await?;
        let patch = ProfilePatch {
            title: Some("Principal Data Scientist".to_string()),
            ..Default::default()
        };
        let updated = update_profile(&mut tx, &created.id, &patch, None).await?;
        let updated = updated.unwrap();
        assert_eq!(updated.document.0.title, "Principal Data Scientist");
        assert_eq!(updated.document.0.name, "Amit Deshmukh");
        assert!(updated.updated_at >= created.updated_at);

        let missing = update_profile(&mut tx, "missing", &patch, None).await?;
        assert!(missing.is_none());
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a postgres DATABASE_URL"]
    async fn test_delete_profile_twice(pool: PgPool) -> anyhow::Result<()> {
        let mut tx = pool.begin().await?;
        let created = create_profile(&mut tx, None, &sample(), None).await?;
        assert_eq!(delete_profile(&mut tx, &created.id).await?, 1);
        assert_eq!(delete_profile(&mut tx, &created.id).await?, 0);
        assert!(get_all_profile(&mut tx).await?.is_empty());
        Ok(())
    }
}
