use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ResourceKind;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate project {0:?}")]
    DuplicateProject(String),

    #[error("duplicate deployment {name:?} in project {project:?}")]
    DuplicateDeployment { project: String, name: String },

    #[error("duplicate resource {name:?} in deployment {project:?}/{deployment:?}")]
    DuplicateResource {
        project: String,
        deployment: String,
        name: String,
    },
}

/// One monitored cloud resource as declared in the catalog
///
/// `name` is the lookup key within its deployment; `identifier` is whatever
/// id the provider wants in API calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDefinition {
    pub name: String,
    pub identifier: String,
    pub kind: ResourceKind,
}

/// Named group of resources deployed together (e.g. "prod", "staging")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentDefinition {
    pub name: String,
    pub resources: Vec<ResourceDefinition>,
}

impl DeploymentDefinition {
    pub fn find_resource(&self, name: &str) -> Option<&ResourceDefinition> {
        self.resources.iter().find(|r| r.name == name)
    }
}

/// Top-level catalog entry grouping deployments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDefinition {
    pub name: String,
    pub deployments: Vec<DeploymentDefinition>,
}

impl ProjectDefinition {
    pub fn find_deployment(&self, name: &str) -> Option<&DeploymentDefinition> {
        self.deployments.iter().find(|d| d.name == name)
    }
}

/// The full set of projects this instance watches
///
/// Loaded once at startup and treated as immutable from then on; every
/// lookup borrows into it.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<ProjectDefinition>,
}

impl Catalog {
    /// Load and validate the catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Parse and validate a catalog from its JSON representation
    /// (a top-level array of projects)
    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let projects: Vec<ProjectDefinition> = serde_json::from_str(data)?;
        let catalog = Self { projects };
        catalog.validate()?;
        Ok(catalog)
    }

    // Sibling names must be unique: duplicates would alias name lookups and
    // merge otherwise distinct metric label sets.
    fn validate(&self) -> Result<(), CatalogError> {
        let mut project_names: Vec<&str> = Vec::new();
        for project in &self.projects {
            if project_names.contains(&project.name.as_str()) {
                return Err(CatalogError::DuplicateProject(project.name.clone()));
            }
            project_names.push(project.name.as_str());

            let mut deployment_names: Vec<&str> = Vec::new();
            for deployment in &project.deployments {
                if deployment_names.contains(&deployment.name.as_str()) {
                    return Err(CatalogError::DuplicateDeployment {
                        project: project.name.clone(),
                        name: deployment.name.clone(),
                    });
                }
                deployment_names.push(deployment.name.as_str());

                let mut resource_names: Vec<&str> = Vec::new();
                for resource in &deployment.resources {
                    if resource_names.contains(&resource.name.as_str()) {
                        return Err(CatalogError::DuplicateResource {
                            project: project.name.clone(),
                            deployment: deployment.name.clone(),
                            name: resource.name.clone(),
                        });
                    }
                    resource_names.push(resource.name.as_str());
                }
            }
        }
        Ok(())
    }

    pub fn projects(&self) -> &[ProjectDefinition] {
        &self.projects
    }

    pub fn find_project(&self, name: &str) -> Option<&ProjectDefinition> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// Deduplicated kinds the catalog references, in first-seen order
    pub fn resource_kinds(&self) -> Vec<ResourceKind> {
        let mut kinds = Vec::new();
        for project in &self.projects {
            for deployment in &project.deployments {
                for resource in &deployment.resources {
                    if !kinds.contains(&resource.kind) {
                        kinds.push(resource.kind);
                    }
                }
            }
        }
        kinds
    }
}
