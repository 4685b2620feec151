//! Business rules around the [`Student`] entity.

use crate::error::CoreError;
use crate::repository::StudentRepository;
use crate::student::{NewStudent, Student};
use crate::types::DbId;

/// Coordinates the repository capability and enforces email uniqueness.
///
/// The repository is passed as an explicit constructor argument. Both
/// mutating operations perform a read-before-write precondition check so
/// that uniqueness and existence violations surface as deterministic domain
/// errors instead of store-level constraint failures; the database unique
/// constraint remains the backstop for the non-atomic check-then-write
/// window under concurrent writers.
#[derive(Debug, Clone)]
pub struct StudentService<R> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Every persisted student, in repository order. An empty store yields
    /// an empty Vec, never an error.
    pub async fn get_all_students(&self) -> Result<Vec<Student>, CoreError> {
        Ok(self.repo.find_all().await?)
    }

    /// Persist a new student, failing with [`CoreError::EmailTaken`] (and
    /// attempting no write) when another student already has the email.
    pub async fn add_student(&self, student: NewStudent) -> Result<Student, CoreError> {
        if self.repo.exists_by_email(&student.email).await? {
            return Err(CoreError::EmailTaken {
                email: student.email,
            });
        }
        Ok(self.repo.save(&student).await?)
    }

    /// Delete a student by id, failing with [`CoreError::StudentNotFound`]
    /// (and attempting no delete) when the id does not exist.
    pub async fn delete_student(&self, id: DbId) -> Result<(), CoreError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(CoreError::StudentNotFound { id });
        }
        Ok(self.repo.delete_by_id(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::{Arc, Mutex};

    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use super::*;
    use crate::student::Gender;

    /// In-memory stand-in for the repository capability. Cloneable so the
    /// test keeps a handle for assertions after handing one to the service.
    /// Ids are assigned sequentially and never reused.
    #[derive(Clone, Default)]
    struct InMemoryRepo {
        inner: Arc<Inner>,
    }

    #[derive(Default)]
    struct Inner {
        rows: Mutex<Vec<Student>>,
        next_id: AtomicI64,
    }

    impl InMemoryRepo {
        fn with_rows(rows: Vec<Student>) -> Self {
            let max_id = rows.iter().map(|s| s.id).max().unwrap_or(0);
            Self {
                inner: Arc::new(Inner {
                    rows: Mutex::new(rows),
                    next_id: AtomicI64::new(max_id),
                }),
            }
        }

        fn row_count(&self) -> usize {
            self.inner.rows.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl StudentRepository for InMemoryRepo {
        async fn find_all(&self) -> anyhow::Result<Vec<Student>> {
            Ok(self.inner.rows.lock().unwrap().clone())
        }

        async fn exists_by_email(&self, email: &str) -> anyhow::Result<bool> {
            Ok(self
                .inner
                .rows
                .lock()
                .unwrap()
                .iter()
                .any(|s| s.email == email))
        }

        async fn exists_by_id(&self, id: DbId) -> anyhow::Result<bool> {
            Ok(self.inner.rows.lock().unwrap().iter().any(|s| s.id == id))
        }

        async fn save(&self, student: &NewStudent) -> anyhow::Result<Student> {
            let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let persisted = Student {
                id,
                name: student.name.clone(),
                email: student.email.clone(),
                gender: student.gender,
            };
            self.inner.rows.lock().unwrap().push(persisted.clone());
            Ok(persisted)
        }

        async fn delete_by_id(&self, id: DbId) -> anyhow::Result<()> {
            self.inner.rows.lock().unwrap().retain(|s| s.id != id);
            Ok(())
        }
    }

    fn jamila() -> NewStudent {
        NewStudent {
            name: "Jamila".to_string(),
            email: "jamila@gmail.com".to_string(),
            gender: Gender::Female,
        }
    }

    #[tokio::test]
    async fn get_all_students_returns_empty_on_empty_store() {
        let repo = InMemoryRepo::default();
        let service = StudentService::new(repo.clone());

        let students = service.get_all_students().await.unwrap();
        assert!(students.is_empty());
    }

    #[tokio::test]
    async fn add_student_email_not_taken_returns_persisted_student() {
        let repo = InMemoryRepo::default();
        let service = StudentService::new(repo.clone());

        let student = service.add_student(jamila()).await.unwrap();

        assert_eq!(student.id, 1);
        assert_eq!(student.name, "Jamila");
        assert_eq!(student.email, "jamila@gmail.com");
        assert_eq!(student.gender, Gender::Female);

        let listed = service.get_all_students().await.unwrap();
        assert_eq!(listed, vec![student]);
    }

    #[tokio::test]
    async fn add_student_email_taken_fails_without_saving() {
        let repo = InMemoryRepo::with_rows(vec![Student {
            id: 1,
            name: "Jamila".to_string(),
            email: "jamila@gmail.com".to_string(),
            gender: Gender::Female,
        }]);
        let service = StudentService::new(repo.clone());

        let err = service.add_student(jamila()).await.unwrap_err();

        assert_matches!(err, CoreError::EmailTaken { .. });
        assert_eq!(err.to_string(), "Email jamila@gmail.com taken");
        assert_eq!(repo.row_count(), 1);
    }

    #[tokio::test]
    async fn add_student_email_check_is_case_sensitive() {
        let repo = InMemoryRepo::with_rows(vec![Student {
            id: 1,
            name: "Jamila".to_string(),
            email: "Jamila@gmail.com".to_string(),
            gender: Gender::Female,
        }]);
        let service = StudentService::new(repo.clone());

        // Differs only in case, so it is a distinct email in this design.
        let student = service.add_student(jamila()).await.unwrap();
        assert_eq!(student.email, "jamila@gmail.com");
        assert_eq!(repo.row_count(), 2);
    }

    #[tokio::test]
    async fn delete_student_id_exists_removes_it() {
        let repo = InMemoryRepo::with_rows(vec![Student {
            id: 2,
            name: "reda".to_string(),
            email: "reda@gmail.com".to_string(),
            gender: Gender::Male,
        }]);
        let service = StudentService::new(repo.clone());

        service.delete_student(2).await.unwrap();

        assert_eq!(repo.row_count(), 0);
        assert!(!repo.exists_by_id(2).await.unwrap());
    }

    #[tokio::test]
    async fn delete_student_id_not_exists_fails_without_deleting() {
        let repo = InMemoryRepo::default();
        let service = StudentService::new(repo.clone());

        let err = service.delete_student(2).await.unwrap_err();

        assert_matches!(err, CoreError::StudentNotFound { id: 2 });
        assert_eq!(err.to_string(), "Student with id 2 does not exists");
    }

    #[tokio::test]
    async fn delete_student_twice_fails_the_second_time() {
        let repo = InMemoryRepo::with_rows(vec![Student {
            id: 2,
            name: "reda".to_string(),
            email: "reda@gmail.com".to_string(),
            gender: Gender::Male,
        }]);
        let service = StudentService::new(repo.clone());

        service.delete_student(2).await.unwrap();
        let err = service.delete_student(2).await.unwrap_err();

        assert_eq!(err.to_string(), "Student with id 2 does not exists");
    }
}
