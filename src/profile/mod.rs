// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Conan profile templates: repository, selection and materialization.

pub mod materializer;
pub mod repository;
pub mod selector;
pub mod substitution;
pub mod template;

pub use materializer::{ProfileMaterializer, Substitutions};
pub use repository::ProfileRepository;
pub use selector::{ProfileSelection, select_best_profile};
pub use template::ProfileTemplate;
