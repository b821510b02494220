//! Localization lookup.

mod translator;

pub use translator::{I18nError, Translator, DEFAULT_NAMESPACE};

/// Translation keys used by effect sequences.
pub mod keys {
    pub const COMMON_ERROR_MESSAGE: &str = "common:error_message";

    pub const BACK_END_SUCCESS_OPERATION: &str = "serviceMessages:back_end_success_operation";
    pub const SEMESTER_SERVICE_IS_ACTIVE: &str = "serviceMessages:semester_service_is_active";
    pub const ACCOUNT_ACTIVATED: &str = "serviceMessages:account_activated";
    pub const UPDATED_LABEL: &str = "serviceMessages:updated_label";
    pub const CREATED_LABEL: &str = "serviceMessages:created_label";
    pub const DELETED_LABEL: &str = "serviceMessages:deleted_label";
    pub const COPIED_LABEL: &str = "serviceMessages:copied_label";
    pub const ARCHIVED_LABEL: &str = "serviceMessages:archived_label";

    pub const FORM_SEMESTER_LABEL: &str = "formElements:form_semester_label";
    pub const FORM_LESSON_LABEL: &str = "formElements:form_lesson_label";
    pub const FORM_STUDENT_LABEL: &str = "formElements:form_student_label";
    pub const FORM_ROOM_TYPE_LABEL: &str = "formElements:form_room_type_label";
    pub const FORM_SCHEDULE_LABEL: &str = "formElements:form_schedule_label";
}
