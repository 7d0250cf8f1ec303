//! # API crate — typed REST client for the CampusShare backend
//!
//! This crate is the single choke point for all network I/O. It wraps the
//! backend's REST surface in a typed [`Client`] that resolves the base
//! address once at startup, attaches the session's bearer credential to
//! every request, and escalates credential rejections (HTTP 401) into a
//! session teardown plus a typed session-invalidated event.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Request plumbing: base-address resolution, bearer injection, JSON/multipart helpers, central 401 handling |
//! | [`models`] | Wire models (resources, stats, contact messages) and request/response bodies |
//! | [`auth`] | `login`, `signup`, `update_profile` |
//! | [`resources`] | Browse/filter, multipart upload, like/bookmark toggles, my-uploads, bookmarks, file download |
//! | [`admin`] | Stats, moderation queues, approve/reject/delete, user management, contact inbox |
//! | [`contact`] | Public contact-form submission |
//!
//! The backend is an external collaborator known only by this contract;
//! everything here treats it as replaceable.

pub mod admin;
pub mod auth;
pub mod client;
pub mod contact;
mod error;
pub mod models;
pub mod resources;

pub use client::{resolve_base_url, Client, SessionInvalidatedHook};
pub use error::ApiError;
pub use models::{
    AdminStats, AdminUserUpdate, AuthResponse, BookmarkResponse, ContactMessage, ContactRequest,
    LikeResponse, MessageStatus, ModerationStatus, ProfileUpdate, Resource, ResourceQuery,
    ResourceType, SignupRequest, UploadRequest, Uploader,
};

pub use session::{AccountStatus, Branch, Identity, ProfileVisibility, Role, SocialLinks};
