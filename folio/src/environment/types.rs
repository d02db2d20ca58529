use folio_core_contact_impl::ContactFeatureServiceImpl;
use folio_core_health_impl::HealthFeatureServiceImpl;
use folio_email_impl::{template::TemplateEmailServiceImpl, EmailServiceImpl};
use folio_persistence_postgres::{contact::PostgresContactRepository, PostgresDatabase};
use folio_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = folio_api_rest::RestServer<HealthFeature, ContactFeature>;

// Persistence
pub type Database = PostgresDatabase;
pub type ContactRepo = PostgresContactRepository;

// Email
pub type Email = EmailServiceImpl;
pub type TemplateEmail = TemplateEmailServiceImpl<Email, Template>;

// Templates
pub type Template = TemplateServiceImpl;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<ContactRepo, TemplateEmail>;
pub type HealthFeature = HealthFeatureServiceImpl<Database, Email>;
