//! 预导入模块，方便使用

pub use super::assignment_files::{
    ActiveModel as AssignmentFileActiveModel, Entity as AssignmentFiles,
    Model as AssignmentFileModel,
};
pub use super::assignment_submissions::{
    ActiveModel as AssignmentSubmissionActiveModel, Entity as AssignmentSubmissions,
    Model as AssignmentSubmissionModel,
};
pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::enrolments::{
    ActiveModel as EnrolmentActiveModel, Entity as Enrolments, Model as EnrolmentModel,
};
pub use super::events::{ActiveModel as EventActiveModel, Entity as Events, Model as EventModel};
pub use super::exams::{ActiveModel as ExamActiveModel, Entity as Exams, Model as ExamModel};
pub use super::grades::{ActiveModel as GradeActiveModel, Entity as Grades, Model as GradeModel};
pub use super::meeting_records::{
    ActiveModel as MeetingRecordActiveModel, Entity as MeetingRecords, Model as MeetingRecordModel,
};
pub use super::personal_activities::{
    ActiveModel as PersonalActivityActiveModel, Entity as PersonalActivities,
    Model as PersonalActivityModel,
};
pub use super::quiz_attempts::{
    ActiveModel as QuizAttemptActiveModel, Entity as QuizAttempts, Model as QuizAttemptModel,
};
pub use super::quizzes::{ActiveModel as QuizActiveModel, Entity as Quizzes, Model as QuizModel};
pub use super::role_assignments::{
    ActiveModel as RoleAssignmentActiveModel, Entity as RoleAssignments,
    Model as RoleAssignmentModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
