//! Activity calendar administration and the public listing.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{
    ActivityCommand, ActivityQuery, ActivityRepository, ActivityRepositoryError,
};
use crate::domain::validation::{
    invalid_field, optional_text, parse_calendar_date, required_date, required_text, INVALID_DATE,
};
use crate::domain::{
    Activity, ActivityId, ActivityPatch, ActivityStatus, ActivitySubmission, Error, MessageKey,
    Messages, infrastructure_error,
};

/// Activity service implementing [`ActivityCommand`] and [`ActivityQuery`].
#[derive(Clone)]
pub struct ActivityService<R> {
    activities: Arc<R>,
    clock: Arc<dyn Clock>,
    messages: Messages,
}

impl<R> ActivityService<R> {
    pub fn new(activities: Arc<R>, clock: Arc<dyn Clock>, messages: Messages) -> Self {
        Self {
            activities,
            clock,
            messages,
        }
    }

    fn map_repository_error(&self, error: ActivityRepositoryError, fallback: MessageKey) -> Error {
        infrastructure_error(self.messages, error.failure(), fallback, &error)
    }

    fn not_found(&self) -> Error {
        Error::not_found(self.messages.text(MessageKey::ActivityNotFound))
    }

    fn parse_status(&self, raw: Option<String>) -> Result<Option<ActivityStatus>, Error> {
        raw.map(|value| {
            value.parse::<ActivityStatus>().map_err(|_| {
                invalid_field(self.messages, "status", MessageKey::InvalidStatus, "invalid_status")
            })
        })
        .transpose()
    }

    fn validate_patch(&self, submission: ActivitySubmission) -> Result<ActivityPatch, Error> {
        let messages = self.messages;
        let date = submission
            .date
            .map(|raw| {
                parse_calendar_date(&raw).ok_or_else(|| {
                    invalid_field(messages, "date", MessageKey::InvalidDate, INVALID_DATE)
                })
            })
            .transpose()?;
        Ok(ActivityPatch {
            title: optional_text(messages, "title", submission.title)?,
            description: optional_text(messages, "description", submission.description)?,
            date,
            time: optional_text(messages, "time", submission.time)?,
            location: optional_text(messages, "location", submission.location)?,
            image_url: optional_text(messages, "imageUrl", submission.image_url)?,
            status: self.parse_status(submission.status)?,
        })
    }
}

#[async_trait]
impl<R> ActivityCommand for ActivityService<R>
where
    R: ActivityRepository,
{
    async fn create(&self, submission: ActivitySubmission) -> Result<Activity, Error> {
        let messages = self.messages;
        let ActivitySubmission {
            title,
            description,
            date,
            time,
            location,
            image_url,
            status,
        } = submission;

        let title = required_text(messages, "title", title)?;
        let description = required_text(messages, "description", description)?;
        let date = required_date(messages, "date", date.as_deref())?;
        let time = required_text(messages, "time", time)?;
        let location = required_text(messages, "location", location)?;
        let image_url = required_text(messages, "imageUrl", image_url)?;
        let status = self.parse_status(status)?.unwrap_or_default();

        let now = self.clock.utc();
        let activity = Activity {
            id: ActivityId::random(),
            title,
            description,
            date,
            time,
            location,
            image_url,
            status,
            created_at: now,
            updated_at: now,
        };

        self.activities
            .insert(&activity)
            .await
            .map_err(|err| self.map_repository_error(err, MessageKey::SaveFailed))?;

        info!(activity_id = %activity.id, date = %activity.date, "activity created");
        Ok(activity)
    }

    async fn update(
        &self,
        id: ActivityId,
        submission: ActivitySubmission,
    ) -> Result<Activity, Error> {
        let patch = self.validate_patch(submission)?;
        let activity = self
            .activities
            .apply_patch(id, patch, self.clock.utc())
            .await
            .map_err(|err| self.map_repository_error(err, MessageKey::UpdateFailed))?
            .ok_or_else(|| self.not_found())?;

        info!(activity_id = %id, "activity updated");
        Ok(activity)
    }

    async fn delete(&self, id: ActivityId) -> Result<(), Error> {
        let removed = self
            .activities
            .delete(id)
            .await
            .map_err(|err| self.map_repository_error(err, MessageKey::DeleteFailed))?;
        if !removed {
            return Err(self.not_found());
        }
        info!(activity_id = %id, "activity deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> ActivityQuery for ActivityService<R>
where
    R: ActivityRepository,
{
    async fn list(&self) -> Result<Vec<Activity>, Error> {
        self.activities
            .list_by_date()
            .await
            .map_err(|err| self.map_repository_error(err, MessageKey::FetchFailed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockActivityRepository;
    use crate::test_support::{FixtureClock, june};
    use rstest::{fixture, rstest};
    use std::sync::Mutex;

    fn complete_submission() -> ActivitySubmission {
        ActivitySubmission {
            title: Some("บวชเนกขัมมะ".to_owned()),
            description: Some("ปฏิบัติธรรมสามวัน".to_owned()),
            date: Some("2025-06-20".to_owned()),
            time: Some("08:00 - 16:00".to_owned()),
            location: Some("ศาลาปฏิบัติธรรม".to_owned()),
            image_url: Some("https://example.com/retreat.jpg".to_owned()),
            status: None,
        }
    }

    #[fixture]
    fn submission() -> ActivitySubmission {
        complete_submission()
    }

    fn service(repo: MockActivityRepository) -> ActivityService<MockActivityRepository> {
        ActivityService::new(
            Arc::new(repo),
            Arc::new(FixtureClock::on(june(1))),
            Messages::default(),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn created_activity_lists_back_unchanged(submission: ActivitySubmission) {
        let stored: Arc<Mutex<Vec<Activity>>> = Arc::default();
        let mut repo = MockActivityRepository::new();
        let sink = Arc::clone(&stored);
        repo.expect_insert().times(1).returning(move |activity| {
            sink.lock().expect("store").push(activity.clone());
            Ok(())
        });
        let source = Arc::clone(&stored);
        repo.expect_list_by_date()
            .times(1)
            .returning(move || Ok(source.lock().expect("store").clone()));
        let service = service(repo);

        let created = service.create(submission).await.expect("created");
        let listed = service.list().await.expect("listed");

        assert_eq!(listed, vec![created.clone()]);
        assert_eq!(created.status, ActivityStatus::Upcoming);
        assert_eq!(created.date, june(20));
        assert_eq!(created.created_at, created.updated_at);
    }

    #[rstest]
    #[case::title(ActivitySubmission { title: None, ..complete_submission() }, "title")]
    #[case::date(ActivitySubmission { date: None, ..complete_submission() }, "date")]
    #[case::time(ActivitySubmission { time: Some(" ".into()), ..complete_submission() }, "time")]
    #[case::image(ActivitySubmission { image_url: None, ..complete_submission() }, "imageUrl")]
    #[tokio::test]
    async fn each_missing_field_gets_its_own_message(
        #[case] submission: ActivitySubmission,
        #[case] field: &str,
    ) {
        let mut repo = MockActivityRepository::new();
        repo.expect_insert().never();

        let error = service(repo).create(submission).await.expect_err("missing");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.message(), format!("กรุณากรอก {field}"));
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_status_is_rejected(submission: ActivitySubmission) {
        let error = service(MockActivityRepository::new())
            .create(ActivitySubmission {
                status: Some("postponed".to_owned()),
                ..submission
            })
            .await
            .expect_err("bad status");

        assert_eq!(error.message(), "สถานะไม่ถูกต้อง");
    }

    #[rstest]
    #[tokio::test]
    async fn update_rejects_blank_patch_strings() {
        let mut repo = MockActivityRepository::new();
        repo.expect_apply_patch().never();

        let error = service(repo)
            .update(
                ActivityId::random(),
                ActivitySubmission {
                    location: Some(String::new()),
                    ..ActivitySubmission::default()
                },
            )
            .await
            .expect_err("blank location");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_missing_activity_is_not_found() {
        let mut repo = MockActivityRepository::new();
        repo.expect_apply_patch().return_once(|_, _, _| Ok(None));

        let error = service(repo)
            .update(
                ActivityId::random(),
                ActivitySubmission {
                    status: Some("completed".to_owned()),
                    ..ActivitySubmission::default()
                },
            )
            .await
            .expect_err("absent");

        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "ไม่พบข้อมูลกิจกรรม");
    }

    #[rstest]
    #[tokio::test]
    async fn deleting_twice_reports_not_found_the_second_time() {
        let mut repo = MockActivityRepository::new();
        let mut remaining = true;
        repo.expect_delete().times(2).returning(move |_| {
            let existed = remaining;
            remaining = false;
            Ok(existed)
        });
        let service = service(repo);
        let id = ActivityId::random();

        service.delete(id).await.expect("first delete");
        let error = service.delete(id).await.expect_err("second delete");

        assert_eq!(error.code(), ErrorCode::NotFound);
    }
}
