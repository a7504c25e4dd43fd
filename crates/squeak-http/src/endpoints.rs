//! Endpoint descriptors for the Squeak backend.
//!
//! Each constant names one backend route together with its verb and its
//! request/response types. Feature accessors are built from this table.

use std::fmt;
use std::marker::PhantomData;

use squeak_core::models::*;

/// HTTP verb of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

/// A typed backend route.
pub struct Endpoint<Req, Resp> {
    pub method: HttpMethod,
    pub path: &'static str,
    types: PhantomData<fn(&Req) -> Resp>,
}

impl<Req, Resp> Endpoint<Req, Resp> {
    pub const fn get(path: &'static str) -> Self {
        Self {
            method: HttpMethod::Get,
            path,
            types: PhantomData,
        }
    }

    pub const fn post(path: &'static str) -> Self {
        Self {
            method: HttpMethod::Post,
            path,
            types: PhantomData,
        }
    }
}

impl<Req, Resp> fmt::Debug for Endpoint<Req, Resp> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

// Profile
pub const GET_PROFILE: Endpoint<Empty, GetProfileResponse> = Endpoint::get("/profile");
pub const UPSERT_PROFILE: Endpoint<UpsertProfileRequest, UpsertProfileResponse> =
    Endpoint::post("/profile/upsert");

// Organization
pub const GET_ORGANIZATION: Endpoint<Empty, OrganizationResponse> = Endpoint::get("/organization");
pub const CREATE_ORGANIZATION: Endpoint<Empty, CreateOrganizationResponse> =
    Endpoint::post("/organization/create");
pub const JOIN_ORGANIZATION: Endpoint<JoinOrganizationRequest, JoinOrganizationResponse> =
    Endpoint::post("/organization/join");
pub const ORGANIZATION_CHECKOUT: Endpoint<Empty, CheckoutSessionResponse> =
    Endpoint::post("/organization/payments/create-checkout-session");
pub const ORGANIZATION_CANCEL_EOP: Endpoint<Empty, CancelSubscriptionResponse> =
    Endpoint::post("/organization/payments/cancel-subscription-eop");

// Teacher / classroom
pub const TEACHER_STATUS: Endpoint<Empty, TeacherStatusResponse> = Endpoint::get("/teacher");
pub const TEACHER_CLASSROOMS: Endpoint<Empty, ClassroomListResponse> =
    Endpoint::get("/teacher/classroom");
pub const CLASSROOM_CONTENT: Endpoint<ClassroomContentParams, Vec<ClassroomContentItem>> =
    Endpoint::get("/teacher/classroom/content");
pub const ACCEPT_CONTENT: Endpoint<ModerateContentRequest, MessageResponse> =
    Endpoint::post("/teacher/classroom/accept");
pub const REJECT_CONTENT: Endpoint<ModerateContentRequest, MessageResponse> =
    Endpoint::post("/teacher/classroom/reject");
pub const CREATE_CLASSROOM: Endpoint<CreateClassroomRequest, CreateClassroomResponse> =
    Endpoint::post("/teacher/classroom/create");
pub const UPDATE_CLASSROOM: Endpoint<UpdateClassroomRequest, UpdateClassroomResponse> =
    Endpoint::post("/teacher/classroom/update");

// Billing
pub const GET_BILLING_ACCOUNT: Endpoint<Empty, BillingAccountResponse> = Endpoint::get("/billing");
pub const BILLING_CHECKOUT: Endpoint<Empty, CheckoutSessionResponse> =
    Endpoint::post("/billing/create-checkout-session");
pub const BILLING_CANCEL_EOP: Endpoint<Empty, CancelSubscriptionResponse> =
    Endpoint::post("/billing/cancel-subscription-eop");

// Student
pub const STUDENT_STATUS: Endpoint<Empty, StudentStatusResponse> = Endpoint::get("/student");
pub const STUDENT_CLASSROOM: Endpoint<Empty, StudentClassroomResponse> =
    Endpoint::get("/student/classroom");
pub const JOIN_CLASSROOM: Endpoint<JoinClassroomRequest, MessageResponse> =
    Endpoint::post("/student/classroom/join");

// Stories
pub const GET_STORY: Endpoint<StoryPageParams, StoryPageResponse> = Endpoint::get("/story");
pub const STORY_CONTEXT: Endpoint<IdParams, StoryContextResponse> =
    Endpoint::get("/story/context");
pub const QUERY_STORIES: Endpoint<ContentQuery, Vec<ContentItem>> = Endpoint::get("/story/query");

// News
pub const GET_NEWS: Endpoint<IdParams, NewsResponse> = Endpoint::get("/news");
pub const QUERY_NEWS: Endpoint<ContentQuery, Vec<ContentItem>> = Endpoint::get("/news/query");

// Progress
pub const GET_PROGRESS: Endpoint<Empty, ProgressResponse> = Endpoint::get("/progress");
pub const INCREMENT_PROGRESS: Endpoint<IncrementProgressParams, ProgressResponse> =
    Endpoint::get("/progress/increment");
pub const GET_STREAK: Endpoint<Empty, StreakResponse> = Endpoint::get("/progress/streak");

// Questions
pub const GET_QUESTION: Endpoint<GetQuestionRequest, GetQuestionResponse> = Endpoint::post("/qna");
pub const EVALUATE_ANSWER: Endpoint<EvaluateAnswerRequest, EvaluateAnswerResponse> =
    Endpoint::post("/qna/evaluate");

// Audio
pub const AUDIO_HEALTH: Endpoint<Empty, AudioHealthResponse> = Endpoint::get("/audio");
pub const TRANSLATE: Endpoint<TranslateRequest, TranslateResponse> =
    Endpoint::post("/audio/translate");
pub const TEXT_TO_SPEECH: Endpoint<TextToSpeechRequest, TextToSpeechResponse> =
    Endpoint::post("/audio/tts");
pub const SPEECH_TO_TEXT: Endpoint<SpeechToTextRequest, SpeechToTextResponse> =
    Endpoint::post("/audio/stt");
