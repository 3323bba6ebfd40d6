//! Request-scoped persistence context for students.
//!
//! Reads go straight to the database. Writes are staged with [`StudentContext::add`],
//! [`StudentContext::update`] and [`StudentContext::remove`] and only reach the
//! database when [`StudentContext::save`] runs them in a single transaction.

use sqlx::{PgConnection, PgPool};
use tracing::debug;

use crate::entities::{NewStudent, StudentEntity};
use crate::metrics::{timed, StoreOperation};

/// A write waiting for the next [`StudentContext::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum PendingChange {
    Insert(NewStudent),
    Update(StudentEntity),
    Delete(i32),
}

/// Result of flushing staged changes.
#[derive(Debug, Default)]
pub struct SaveOutcome {
    /// Inserted rows in staging order, with their generated ids.
    pub inserted: Vec<StudentEntity>,
    /// Total rows touched by inserts, updates and deletes.
    pub rows_affected: u64,
}

/// Unit of work over the students table.
///
/// Construct one per request; it is not meant to be shared.
pub struct StudentContext {
    pool: PgPool,
    pending: Vec<PendingChange>,
}

impl StudentContext {
    /// Creates an empty context on top of the pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            pending: Vec::new(),
        }
    }

    /// Returns every stored student, in storage order.
    pub async fn all(&self) -> Result<Vec<StudentEntity>, sqlx::Error> {
        let query = sqlx::query_as::<_, StudentEntity>(
            r#"
            SELECT id, first_name, last_name,
                   social_security_number::text AS social_security_number, email
            FROM students
            "#,
        )
        .fetch_all(&self.pool);
        timed(StoreOperation::ListStudents, query).await
    }

    /// Finds the student with the given id.
    pub async fn find(&self, id: i32) -> Result<Option<StudentEntity>, sqlx::Error> {
        let query = sqlx::query_as::<_, StudentEntity>(
            r#"
            SELECT id, first_name, last_name,
                   social_security_number::text AS social_security_number, email
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool);
        timed(StoreOperation::FindStudent, query).await
    }

    /// Stages an insert.
    pub fn add(&mut self, student: NewStudent) {
        self.pending.push(PendingChange::Insert(student));
    }

    /// Stages an overwrite of all business fields of `student.id`.
    pub fn update(&mut self, student: StudentEntity) {
        self.pending.push(PendingChange::Update(student));
    }

    /// Stages a delete.
    pub fn remove(&mut self, student: StudentEntity) {
        self.pending.push(PendingChange::Delete(student.id));
    }

    /// Whether any writes are staged.
    pub fn has_changes(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of staged writes.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Runs every staged write in one transaction.
    ///
    /// On failure the transaction is rolled back and the staged writes are kept.
    pub async fn save(&mut self) -> Result<SaveOutcome, sqlx::Error> {
        let mut outcome = SaveOutcome::default();
        if self.pending.is_empty() {
            return Ok(outcome);
        }

        let pool = &self.pool;
        let pending = &self.pending;
        timed::<_, sqlx::Error, _>(StoreOperation::SaveChanges, async {
            let mut tx = pool.begin().await?;
            for change in pending {
                apply_change(&mut *tx, change, &mut outcome).await?;
            }
            tx.commit().await
        })
        .await?;

        debug!(
            changes = self.pending.len(),
            rows_affected = outcome.rows_affected,
            "Saved student changes"
        );
        self.pending.clear();
        Ok(outcome)
    }
}

async fn apply_change(
    conn: &mut PgConnection,
    change: &PendingChange,
    outcome: &mut SaveOutcome,
) -> Result<(), sqlx::Error> {
    match change {
        PendingChange::Insert(student) => {
            let entity = sqlx::query_as::<_, StudentEntity>(
                r#"
                INSERT INTO students (first_name, last_name, social_security_number, email)
                VALUES ($1, $2, $3, $4)
                RETURNING id, first_name, last_name,
                          social_security_number::text AS social_security_number, email
                "#,
            )
            .bind(&student.first_name)
            .bind(&student.last_name)
            .bind(&student.social_security_number)
            .bind(&student.email)
            .fetch_one(&mut *conn)
            .await?;
            outcome.rows_affected += 1;
            outcome.inserted.push(entity);
        }
        PendingChange::Update(student) => {
            let result = sqlx::query(
                r#"
                UPDATE students
                SET
                    first_name = $2,
                    last_name = $3,
                    social_security_number = $4,
                    email = $5
                WHERE id = $1
                "#,
            )
            .bind(student.id)
            .bind(&student.first_name)
            .bind(&student.last_name)
            .bind(&student.social_security_number)
            .bind(&student.email)
            .execute(&mut *conn)
            .await?;
            outcome.rows_affected += result.rows_affected();
        }
        PendingChange::Delete(id) => {
            let result = sqlx::query(
                r#"
                DELETE FROM students
                WHERE id = $1
                "#,
            )
            .bind(*id)
            .execute(&mut *conn)
            .await?;
            outcome.rows_affected += result.rows_affected();
        }
    }
    Ok(())
}
