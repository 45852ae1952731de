//! Render the three module source files

use crate::naming::ModuleName;

/// Path of the schema stub, relative to the module directory
pub const TYPES_FILE: &str = "types.ts";
/// Path of the create procedure stub, relative to the module directory
pub const CREATE_PROCEDURE_FILE: &str = "procedures/create.ts";
/// Path of the router stub, relative to the module directory
pub const ROUTER_FILE: &str = "router.ts";

/// One generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path relative to the module directory, always `/`-separated
    pub relative_path: &'static str,
    pub contents: String,
}

/// Every file of a module, in write order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedModule {
    pub files: Vec<RenderedFile>,
}

impl RenderedModule {
    pub fn get(&self, relative_path: &str) -> Option<&RenderedFile> {
        self.files.iter().find(|f| f.relative_path == relative_path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.files.iter().map(|f| f.relative_path)
    }
}

/// Render the schema, procedure and router stubs for `name`
pub fn render_module(name: &ModuleName) -> RenderedModule {
    RenderedModule {
        files: vec![
            RenderedFile {
                relative_path: TYPES_FILE,
                contents: finish(render_types(name)),
            },
            RenderedFile {
                relative_path: CREATE_PROCEDURE_FILE,
                contents: finish(render_create_procedure(name)),
            },
            RenderedFile {
                relative_path: ROUTER_FILE,
                contents: finish(render_router(name)),
            },
        ],
    }
}

/// Strip surrounding whitespace and end with exactly one newline
fn finish(text: String) -> String {
    let mut out = text.trim().to_string();
    out.push('\n');
    out
}

fn render_types(name: &ModuleName) -> String {
    let schema = name.schema_ident();
    format!(
        r#"
import {{ z }} from "zod";

export const {schema} = z.object({{
  // Define input shape
}});

export type {form_values} = z.infer<typeof {schema}>;
"#,
        schema = schema,
        form_values = name.form_values_ident(),
    )
}

fn render_create_procedure(name: &ModuleName) -> String {
    format!(
        r#"
import {{ ORPCError }} from "@orpc/server";
import {{ z }} from "zod";
import {{ publicProcedure }} from "../../orpc/procedures";
import {{ {schema} }} from "../types";

export const {procedure} = publicProcedure
  .route({{
    method: "POST",
    path: "{path}",
    tags: ["{pascal}"],
    summary: "Create {name}",
    description: "Create a new {name} record",
  }})
  .input({schema})
  .output(
    z.object({{
      id: z.string(),
    }})
  )
  .handler(async ({{ input, context }}) => {{
    // TODO: get session if needed: auth.api.getSession({{ headers: context.headers }})
    // TODO: call @repo/database create function
    throw new ORPCError("NOT_IMPLEMENTED", {{ message: "Implement create handler" }});
  }});
"#,
        schema = name.schema_ident(),
        procedure = name.procedure_ident(),
        path = name.route_path(),
        pascal = name.pascal_case(),
        name = name,
    )
}

fn render_router(name: &ModuleName) -> String {
    format!(
        r#"
import {{ {procedure} }} from "./procedures/create";

export const {router} = {{
  create: {procedure},
}};
"#,
        procedure = name.procedure_ident(),
        router = name.router_ident(),
    )
}
