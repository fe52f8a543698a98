use std::collections::{HashMap, HashSet};

use exlink_client::{Presentation, PresentationError, Quat, ResourceHandle, Vec3};

/// One call made by a hook into the presentation layer
#[derive(Clone, Debug, PartialEq)]
pub enum PresentationCall {
    CreateNode { name: String, handle: ResourceHandle },
    Instantiate { resource: String, handle: ResourceHandle },
    Destroy { handle: ResourceHandle },
    SetTransform { handle: ResourceHandle, position: Vec3, rotation: Quat },
    SetText { handle: ResourceHandle, text: String },
    SetName { handle: ResourceHandle, name: String },
}

// Node
#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    pub resource: Option<String>,
    pub parent: Option<ResourceHandle>,
    pub position: Vec3,
    pub rotation: Quat,
    pub text: Option<String>,
}

/// In-memory scene that records every call it receives.
///
/// Resources resolve only if they were registered with
/// [`RecordingPresentation::with_resources`] or [`RecordingPresentation::add_resource`].
/// Destroying a node destroys its children, as a scene graph would.
#[derive(Default)]
pub struct RecordingPresentation {
    next_handle: u64,
    resources: HashSet<String>,
    nodes: HashMap<ResourceHandle, SceneNode>,
    calls: Vec<PresentationCall>,
}

impl RecordingPresentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resources(resources: &[&str]) -> Self {
        let mut presentation = Self::new();
        for resource in resources {
            presentation.add_resource(resource);
        }
        presentation
    }

    pub fn add_resource(&mut self, resource: &str) {
        self.resources.insert(resource.to_string());
    }

    pub fn calls(&self) -> &[PresentationCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn node(&self, handle: ResourceHandle) -> Option<&SceneNode> {
        self.nodes.get(&handle)
    }

    pub fn is_live(&self, handle: ResourceHandle) -> bool {
        self.nodes.contains_key(&handle)
    }

    pub fn live_count(&self) -> usize {
        self.nodes.len()
    }

    /// Live nodes instantiated from `resource`
    pub fn instances_of(&self, resource: &str) -> Vec<ResourceHandle> {
        let mut handles: Vec<ResourceHandle> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.resource.as_deref() == Some(resource))
            .map(|(handle, _)| *handle)
            .collect();
        handles.sort_by_key(|handle| handle.to_u64());
        handles
    }

    pub fn instantiate_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, PresentationCall::Instantiate { .. }))
            .count()
    }

    pub fn destroy_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, PresentationCall::Destroy { .. }))
            .count()
    }

    fn allocate(&mut self, name: &str, resource: Option<&str>, parent: Option<ResourceHandle>) -> ResourceHandle {
        self.next_handle += 1;
        let handle = ResourceHandle::from_u64(self.next_handle);
        self.nodes.insert(
            handle,
            SceneNode {
                name: name.to_string(),
                resource: resource.map(str::to_string),
                parent,
                position: Vec3::ZERO,
                rotation: Quat::IDENTITY,
                text: None,
            },
        );
        handle
    }
}

impl Presentation for RecordingPresentation {
    fn create_node(&mut self, name: &str, parent: Option<ResourceHandle>) -> ResourceHandle {
        let handle = self.allocate(name, None, parent);
        self.calls.push(PresentationCall::CreateNode {
            name: name.to_string(),
            handle,
        });
        handle
    }

    fn instantiate(
        &mut self,
        resource: &str,
        parent: Option<ResourceHandle>,
    ) -> Result<ResourceHandle, PresentationError> {
        if !self.resources.contains(resource) {
            return Err(PresentationError::ResourceNotFound {
                resource: resource.to_string(),
            });
        }
        let handle = self.allocate(resource, Some(resource), parent);
        self.calls.push(PresentationCall::Instantiate {
            resource: resource.to_string(),
            handle,
        });
        Ok(handle)
    }

    fn destroy(&mut self, handle: ResourceHandle) {
        self.calls.push(PresentationCall::Destroy { handle });

        let mut doomed = vec![handle];
        while let Some(current) = doomed.pop() {
            self.nodes.remove(&current);
            doomed.extend(
                self.nodes
                    .iter()
                    .filter(|(_, node)| node.parent == Some(current))
                    .map(|(child, _)| *child),
            );
        }
    }

    fn set_transform(&mut self, handle: ResourceHandle, position: Vec3, rotation: Quat) {
        self.calls.push(PresentationCall::SetTransform {
            handle,
            position,
            rotation,
        });
        if let Some(node) = self.nodes.get_mut(&handle) {
            node.position = position;
            node.rotation = rotation;
        }
    }

    fn set_text(&mut self, handle: ResourceHandle, text: &str) {
        self.calls.push(PresentationCall::SetText {
            handle,
            text: text.to_string(),
        });
        if let Some(node) = self.nodes.get_mut(&handle) {
            node.text = Some(text.to_string());
        }
    }

    fn set_name(&mut self, handle: ResourceHandle, name: &str) {
        self.calls.push(PresentationCall::SetName {
            handle,
            name: name.to_string(),
        });
        if let Some(node) = self.nodes.get_mut(&handle) {
            node.name = name.to_string();
        }
    }
}
