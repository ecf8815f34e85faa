//! Server-side API backend and business logic.
//!
//! This module contains the REST backend of the messaging service: HTTP endpoints,
//! business logic, and data access. The backend uses Axum as the web framework and
//! SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation and orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database connection, migrations and CORS setup
//! - **Router** (`router`) - Axum route configuration
//! - **Docs** (`docs`) - OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts inputs, converts DTOs to params, calls service
//! 3. **Service** validates, executes business logic, orchestrates data operations
//! 4. **Data** queries database inside transactions where needed, converts entities to domain models
//! 5. **Controller** converts domain models to DTOs and wraps them in the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
