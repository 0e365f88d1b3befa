//! Project CRUD operations.
//!
//! Error policy differs per operation and callers rely on it:
//! `save_project` and `get_projects` swallow failures (in-band outcome or
//! empty list), while `update_project` and `delete_project` return them.

use tracing::{error, info};

use crate::{
    Database, DbError,
    models::{DeleteOutcome, NewProject, Project, SaveOutcome, UpdateResult},
};

/// Insert a new project and report the store-assigned id.
///
/// Never returns an error: connection and statement failures come back as
/// `SaveOutcome { success: false, error: Some(..) }`.
pub async fn save_project(db: &Database, project: &NewProject) -> SaveOutcome {
    info!(?project, "Saving project");

    match insert_project(db, project).await {
        Ok(id) => {
            info!("Project saved with id {id}");
            SaveOutcome::inserted(id)
        }
        Err(e) => {
            error!("Failed to save project: {e}");
            SaveOutcome::failed(e.to_string())
        }
    }
}

async fn insert_project(db: &Database, project: &NewProject) -> Result<i64, DbError> {
    let conn = db.acquire().await?;
    let mut conn = conn.lock().await;

    let result = sqlx::query(
        r#"
        INSERT INTO projects (title, description, image_url, tech_used, github_rep_link, live_demo_link)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(project.title.clone())
    .bind(project.description.clone())
    .bind(project.img_url.clone())
    .bind(project.tech_used.clone())
    .bind(project.github_url.clone())
    .bind(project.live_demo_link.clone())
    .execute(&mut *conn)
    .await?;

    if let Some(id) = result.last_insert_id() {
        return Ok(id);
    }

    // The SQLite backend leaves the key out of the result; read it back while
    // the lock is still held so no other statement can move it.
    let id = sqlx::query_scalar::<_, i64>("SELECT last_insert_rowid()")
        .fetch_one(&mut *conn)
        .await?;
    Ok(id)
}

/// Return every project whose title contains `search_term`.
///
/// Matching is `LIKE '%term%'`; case sensitivity follows the store's
/// collation and rows come back in the store's natural order. Any failure
/// yields an empty list, so "no matches" and "query failed" look the same.
/// Use [`try_get_projects`] to tell them apart.
pub async fn get_projects(db: &Database, search_term: &str) -> Vec<Project> {
    match try_get_projects(db, search_term).await {
        Ok(rows) => rows,
        Err(e) => {
            error!("Project search failed: {e}");
            Vec::new()
        }
    }
}

/// Same query as [`get_projects`], with failures returned.
pub async fn try_get_projects(db: &Database, search_term: &str) -> Result<Vec<Project>, DbError> {
    let conn = db.acquire().await?;
    let mut conn = conn.lock().await;

    let rows = sqlx::query_as::<_, Project>(
        r#"
        SELECT id, title, description, image_url, tech_used, github_rep_link, live_demo_link
        FROM projects
        WHERE title LIKE ?
        "#,
    )
    .bind(format!("%{search_term}%"))
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

/// Overwrite all six fields of the project with `project_id`.
///
/// An unknown id is not an error: the result simply reports zero affected rows.
pub async fn update_project(
    db: &Database,
    project_id: i64,
    project: &NewProject,
) -> Result<UpdateResult, DbError> {
    let outcome = async {
        let conn = db.acquire().await?;
        let mut conn = conn.lock().await;

        let result = sqlx::query(
            r#"
            UPDATE projects
            SET title = ?, description = ?, image_url = ?, tech_used = ?, github_rep_link = ?, live_demo_link = ?
            WHERE id = ?
            "#,
        )
        .bind(project.title.clone())
        .bind(project.description.clone())
        .bind(project.img_url.clone())
        .bind(project.tech_used.clone())
        .bind(project.github_url.clone())
        .bind(project.live_demo_link.clone())
        .bind(project_id)
        .execute(&mut *conn)
        .await?;

        Ok::<_, DbError>(UpdateResult { affected_rows: result.rows_affected() })
    }
    .await;

    if let Err(ref e) = outcome {
        error!("Failed to update project {project_id}: {e}");
    }
    outcome
}

/// Permanently delete the project with `project_id`.
///
/// A missing row is reported in-band via [`DeleteOutcome::not_found`];
/// connection and statement failures are returned as errors.
pub async fn delete_project(db: &Database, project_id: i64) -> Result<DeleteOutcome, DbError> {
    let outcome = async {
        let conn = db.acquire().await?;
        let mut conn = conn.lock().await;

        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(project_id)
            .execute(&mut *conn)
            .await?;

        Ok::<_, DbError>(result.rows_affected())
    }
    .await;

    match outcome {
        Ok(0) => {
            info!("No project with id {project_id} found");
            Ok(DeleteOutcome::not_found())
        }
        Ok(_) => {
            info!("Project {project_id} deleted");
            Ok(DeleteOutcome::deleted())
        }
        Err(e) => {
            error!("Failed to delete project {project_id}: {e}");
            Err(e)
        }
    }
}
