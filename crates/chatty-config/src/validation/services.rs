//! Service table validation.

use std::collections::HashSet;

use crate::schema::ServiceDescriptor;

/// Launch URLs must be plain web origins.
const ALLOWED_URL_SCHEMES: &[&str] = &["https://", "http://"];

pub(super) fn validate_services(errors: &mut Vec<String>, services: &[ServiceDescriptor]) {
    if services.is_empty() {
        errors.push("services must contain at least one entry".into());
        return;
    }

    let mut seen = HashSet::new();
    for service in services {
        let id = service.id.as_str();
        if !service.id.is_valid() {
            errors.push(format!(
                "services.id = {id:?} must match [a-z0-9][a-z0-9_-]*"
            ));
        }
        if !seen.insert(id) {
            errors.push(format!("duplicate service id {id:?}"));
        }
        if !ALLOWED_URL_SCHEMES
            .iter()
            .any(|scheme| service.launch_url.starts_with(scheme))
        {
            errors.push(format!(
                "services[{id}].launch_url = {:?} must start with https:// or http://",
                service.launch_url
            ));
        }
        if service.count_script.trim().is_empty() {
            errors.push(format!("services[{id}].count_script must not be empty"));
        }
    }
}
