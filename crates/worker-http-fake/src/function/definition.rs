//! Static function metadata.
//!
//! The host expects every context to describe the function it invokes. The
//! fake descriptor is a constant and never depends on the request.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingMetadata {
    pub name: &'static str,
    pub binding_type: &'static str,
    pub direction: BindingDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionParameter {
    pub name: &'static str,
    pub type_name: &'static str,
    pub properties: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub entry_point: &'static str,
    pub path_to_assembly: &'static str,
    /// Keyed by binding key
    pub input_bindings: &'static [(&'static str, BindingMetadata)],
    pub output_bindings: &'static [(&'static str, BindingMetadata)],
    pub parameters: &'static [FunctionParameter],
}

impl FunctionDefinition {
    pub fn input_binding(&self, key: &str) -> Option<&BindingMetadata> {
        lookup(self.input_bindings, key)
    }

    pub fn output_binding(&self, key: &str) -> Option<&BindingMetadata> {
        lookup(self.output_bindings, key)
    }
}

fn lookup<'a>(
    bindings: &'a [(&'static str, BindingMetadata)],
    key: &str,
) -> Option<&'a BindingMetadata> {
    bindings
        .iter()
        .find(|(binding_key, _)| *binding_key == key)
        .map(|(_, metadata)| metadata)
}

const FAKE_BINDING_NAME: &str = "FakeBindingMetadata";

pub const FAKE_FUNCTION_DEFINITION: FunctionDefinition = FunctionDefinition {
    id: "1835d7b55c984790815d072cc94c6f71",
    name: "FakeFunctionDefinition",
    entry_point: "FakeFunctionDefinition.Run",
    path_to_assembly: env!("CARGO_PKG_NAME"),
    input_bindings: &[
        (
            "triggerName",
            BindingMetadata {
                name: FAKE_BINDING_NAME,
                binding_type: "TestTrigger",
                direction: BindingDirection::In,
            },
        ),
        (
            "inputName",
            BindingMetadata {
                name: FAKE_BINDING_NAME,
                binding_type: "TestInput",
                direction: BindingDirection::In,
            },
        ),
    ],
    output_bindings: &[(
        "outputName1",
        BindingMetadata {
            name: FAKE_BINDING_NAME,
            binding_type: "TestOutput1",
            direction: BindingDirection::Out,
        },
    )],
    parameters: &[FunctionParameter {
        name: "Parameter1",
        type_name: "string",
        properties: &[("TestPropertyKey", "TestPropertyValue")],
    }],
};
