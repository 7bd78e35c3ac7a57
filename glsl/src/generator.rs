//! GLSL code generation
//!
//! A recursive visitor over the converted AST that writes GLSL text into an
//! owned output buffer. The emitter keeps an explicit output state: current
//! indentation, a begin-line/end-line protocol with an options stack (used
//! to re-emit `for` headers inline), and flags for the entry point body and
//! interface block contexts.

use std::fmt::Write;

use hlslcc_ast as ast;
use hlslcc_ast::{
    AssignOp, Attribute, BinOp, CtrlTransfer, DataType, Expr, ExprKind, FunctionCall, FunctionId,
    InputModifier, Intrinsic, Literal, Register, ScalarType, ShaderTarget, Stmt, StmtKind,
    SwitchCase, SymbolRef, TypeDenoter, UnaryOp, VarDeclStmt, VarId, VarIdent,
};
use hlslcc_text::{Reporter, SourcePosition};

use crate::keywords::*;
use crate::{
    Formatting, GeneratedGlsl, GenerateError, GlslVersion, ShaderInput, ShaderOutput, Statistics,
    TextureBinding,
};

mod intrinsic_helpers;
use intrinsic_helpers::write_referenced_intrinsics;

/// Line writing behavior for the current emission context
///
/// Both flags are disabled while re-emitting statements inline, e.g. the
/// init statement inside a `for` header.
#[derive(Copy, Clone)]
struct LineOptions {
    enable_new_line: bool,
    enable_indent: bool,
}

const DEFAULT_LINE_OPTIONS: LineOptions = LineOptions {
    enable_new_line: true,
    enable_indent: true,
};

/// Output state threaded through every emit function
struct Context<'a> {
    program: &'a ast::Program,
    target: ShaderTarget,
    version: GlslVersion,
    formatting: &'a Formatting,
    entry_id: FunctionId,

    indent: u32,
    line_options: Vec<LineOptions>,
    inside_entry_point: bool,
    inside_interface_block: bool,

    statistics: Statistics,
    reporter: &'a mut Reporter,
}

impl<'a> Context<'a> {
    fn options(&self) -> LineOptions {
        self.line_options
            .last()
            .copied()
            .unwrap_or(DEFAULT_LINE_OPTIONS)
    }

    fn push_options(&mut self, options: LineOptions) {
        self.line_options.push(options);
    }

    fn pop_options(&mut self) {
        self.line_options.pop();
    }

    /// Start a line: writes the indentation of the current level
    fn begin_line(&self, output: &mut String) {
        if self.options().enable_indent {
            for _ in 0..self.indent {
                output.push_str(&self.formatting.indent);
            }
        }
    }

    /// Finish a line with a newline character
    fn end_line(&self, output: &mut String) {
        if self.options().enable_new_line {
            output.push('\n');
        }
    }

    fn write_line(&self, output: &mut String, text: &str) {
        self.begin_line(output);
        output.push_str(text);
        self.end_line(output);
    }

    /// Write an empty separator line
    fn blank(&self, output: &mut String) {
        if self.options().enable_new_line {
            output.push('\n');
        }
    }

    fn open_scope(&mut self, output: &mut String) {
        self.write_line(output, "{");
        self.indent += 1;
    }

    fn close_scope(&mut self, output: &mut String, semicolon: bool) {
        self.indent -= 1;
        self.write_line(output, if semicolon { "};" } else { "}" });
    }

    /// Write a `#line` directive for the node position when enabled
    fn line_mark(&self, output: &mut String, pos: SourcePosition) {
        if self.formatting.line_marks && pos.is_known() && self.options().enable_new_line {
            self.write_line(output, &format!("#line {}", pos.line));
        }
    }

    fn error(&mut self, message: impl Into<String>, pos: Option<SourcePosition>) {
        self.reporter.error(message, pos);
    }

    fn warning(&mut self, message: impl Into<String>, pos: Option<SourcePosition>) {
        self.reporter.warning(message, pos);
    }
}

/// Generate GLSL source for a converted program
pub(crate) fn generate(
    program: &ast::Program,
    input: &ShaderInput,
    output_desc: &ShaderOutput,
    extensions: &[&'static str],
    reporter: &mut Reporter,
) -> Result<GeneratedGlsl, GenerateError> {
    let entry_id = match program.entry_point {
        Some(id) => id,
        None => return Err(GenerateError::MissingEntryPoint(input.entry_point.to_string())),
    };

    let mut context = Context {
        program,
        target: input.target,
        version: output_desc.version,
        formatting: &output_desc.formatting,
        entry_id,
        indent: 0,
        line_options: Vec::new(),
        inside_entry_point: false,
        inside_interface_block: false,
        statistics: Statistics::default(),
        reporter,
    };
    let mut output = String::new();

    write_header_comments(input, &mut output, &context);
    write_version_and_extensions(extensions, &mut output, &context);
    emit_program(program, &mut output, &mut context)?;

    Ok(GeneratedGlsl {
        source: output,
        statistics: context.statistics,
    })
}

fn comment(text: &str, output: &mut String, context: &Context) {
    context.write_line(output, &format!("// {}", text));
}

fn write_header_comments(input: &ShaderInput, output: &mut String, context: &Context) {
    if input.entry_point.is_empty() {
        comment(&format!("GLSL {}", input.target), output, context);
    } else {
        comment(
            &format!("GLSL {} \"{}\"", input.target, input.entry_point),
            output,
            context,
        );
    }
    comment("Generated by hlslcc", output, context);
    if let Some(timestamp) = &context.formatting.timestamp {
        comment(timestamp, output, context);
    }
    context.blank(output);
}

fn write_version_and_extensions(extensions: &[&'static str], output: &mut String, context: &Context) {
    context.write_line(output, &format!("#version {}", context.version.number()));
    context.blank(output);

    if !extensions.is_empty() {
        for extension in extensions {
            context.write_line(output, &format!("#extension {} : enable", extension));
        }
        context.blank(output);
    }
}

/// Emit the stage preamble and all global declarations
fn emit_program(
    program: &ast::Program,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    // Fragment stages always redeclare gl_FragCoord with the HLSL origin
    if context.target == ShaderTarget::Fragment {
        context.begin_line(output);
        output.push_str("layout(origin_upper_left");
        if program.has_sm3_screen_space {
            output.push_str(", pixel_center_integer");
        }
        output.push_str(") in vec4 gl_FragCoord;");
        context.end_line(output);
        context.blank(output);
    }

    let entry_point = program.function(context.entry_id);
    if !entry_point.attributes.is_empty() {
        for attribute in &entry_point.attributes {
            write_attribute(attribute, output, context)?;
        }
        context.blank(output);
    }

    write_referenced_intrinsics(program, output, context);

    write_global_input_semantics(output, context)?;
    write_global_output_semantics(output, context)?;

    for decl in &program.global_decls {
        match decl {
            ast::GlobalDecl::Function(id) => emit_function_decl(*id, output, context)?,
            ast::GlobalDecl::Struct(id) => emit_struct_decl_stmt(*id, output, context)?,
            ast::GlobalDecl::UniformBuffer(id) => emit_uniform_buffer(*id, output, context)?,
            ast::GlobalDecl::Texture(id) => emit_texture_decl(*id, output, context)?,
            ast::GlobalDecl::Variable(stmt) => {
                context.line_mark(output, stmt.pos);
                emit_var_decl_stmt(stmt, output, context)?;
            }
            // GLSL has no typedef; aliases are resolved at every use site
            ast::GlobalDecl::Alias(_) => {}
        }
    }

    Ok(())
}

/* --- Attributes --- */

fn write_attribute(
    attribute: &Attribute,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    match attribute.ident.as_str() {
        "numthreads" => write_attribute_num_threads(attribute, output, context),
        "earlydepthstencil" => {
            context.write_line(output, "layout(early_fragment_tests) in;");
            Ok(())
        }
        _ => Ok(()),
    }
}

fn write_attribute_num_threads(
    attribute: &Attribute,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    if attribute.arguments.len() != 3 {
        context.error(
            "invalid number of arguments in \"numthreads\" attribute",
            Some(attribute.pos),
        );
        return Ok(());
    }

    context.begin_line(output);
    output.push_str("layout(local_size_x = ");
    emit_expr(&attribute.arguments[0], output, context)?;
    output.push_str(", local_size_y = ");
    emit_expr(&attribute.arguments[1], output, context)?;
    output.push_str(", local_size_z = ");
    emit_expr(&attribute.arguments[2], output, context)?;
    output.push_str(") in;");
    context.end_line(output);
    Ok(())
}

/* --- Entry point input/output semantics --- */

/// Write `in` globals for the user-defined entry point inputs
fn write_global_input_semantics(
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    if context.target == ShaderTarget::Compute {
        return Ok(());
    }

    let entry_point = context.program.function(context.entry_id);
    let refs = entry_point.input_semantics.var_decl_refs.clone();

    let mut written = false;
    for var_id in refs {
        let variable = context.program.variable(var_id);
        context.begin_line(output);
        output.push_str("in ");
        write_type_denoter(&variable.ty, variable.pos, output, context)?;
        output.push(' ');
        output.push_str(&variable.ident);
        output.push(';');
        context.end_line(output);
        written = true;
    }

    if written {
        context.blank(output);
    }
    Ok(())
}

/// Write `out` globals for the user-defined entry point outputs
///
/// Fragment outputs carry an explicit location from the semantic index.
fn write_global_output_semantics(
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    if context.target == ShaderTarget::Compute {
        return Ok(());
    }

    let entry_point = context.program.function(context.entry_id);
    let refs = entry_point.output_semantics.var_decl_refs.clone();

    let mut written = false;
    for var_id in refs {
        let variable = context.program.variable(var_id);
        context.begin_line(output);
        match &variable.semantic {
            Some(semantic) if context.target == ShaderTarget::Fragment => {
                write!(output, "layout(location = {}) out ", semantic.index()).unwrap();
            }
            _ => output.push_str("out "),
        }
        write_type_denoter(&variable.ty, variable.pos, output, context)?;
        output.push(' ');
        output.push_str(&variable.ident);
        output.push(';');
        context.end_line(output);
        written = true;
    }

    if written {
        context.blank(output);
    }
    Ok(())
}

/// Declare locals initialized from system-value built-ins at `main` entry
fn write_local_input_semantics(
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    let entry_point = context.program.function(context.entry_id);
    let refs = entry_point.input_semantics.var_decl_refs_sv.clone();

    let mut written = false;
    for var_id in refs {
        let variable = context.program.variable(var_id);
        let Some(semantic) = variable.semantic.clone() else {
            continue;
        };
        match semantic_to_glsl_keyword(&semantic, context.target) {
            Some(keyword) => {
                context.begin_line(output);
                write_type_denoter(&variable.ty, variable.pos, output, context)?;
                let variable = context.program.variable(var_id);
                write!(output, " {} = {};", variable.ident, keyword).unwrap();
                context.end_line(output);
                written = true;
            }
            None => context.error(
                "failed to map semantic name to GLSL keyword",
                Some(variable.pos),
            ),
        }
    }

    if written {
        context.blank(output);
    }
    Ok(())
}

/// Declare empty locals for the system-value outputs at `main` entry
fn write_local_output_semantics(
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    let entry_point = context.program.function(context.entry_id);
    let refs = entry_point.output_semantics.var_decl_refs_sv.clone();

    let mut written = false;
    for var_id in refs {
        let variable = context.program.variable(var_id);
        context.begin_line(output);
        write_type_denoter(&variable.ty, variable.pos, output, context)?;
        let variable = context.program.variable(var_id);
        write!(output, " {};", variable.ident).unwrap();
        context.end_line(output);
        written = true;
    }

    if written {
        context.blank(output);
    }
    Ok(())
}

/// Flush the entry point outputs
///
/// With a return expression the outputs are assigned from it (member-wise
/// when the entry point returned a struct); without one the system-value
/// locals are flushed into their built-ins.
fn write_output_semantics_assignment(
    expr: Option<&Expr>,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    let entry_point = context.program.function(context.entry_id);
    let user_refs = entry_point.output_semantics.var_decl_refs.clone();
    let sv_refs = entry_point.output_semantics.var_decl_refs_sv.clone();
    let from_struct = entry_point.output_struct.is_some();
    let return_semantic = entry_point.return_semantic.clone();
    let entry_pos = entry_point.pos;

    let mut written = false;
    match expr {
        Some(expr) => {
            for var_id in user_refs {
                let ident = context.program.variable(var_id).ident.clone();
                context.begin_line(output);
                output.push_str(&ident);
                output.push_str(" = ");
                emit_expr(expr, output, context)?;
                if from_struct {
                    output.push('.');
                    output.push_str(&ident);
                }
                output.push(';');
                context.end_line(output);
                written = true;
            }
            for var_id in sv_refs {
                let variable = context.program.variable(var_id);
                let Some(semantic) = variable.semantic.clone() else {
                    continue;
                };
                let ident = variable.ident.clone();
                let pos = variable.pos;
                match semantic_to_glsl_keyword(&semantic, context.target) {
                    Some(keyword) => {
                        context.begin_line(output);
                        output.push_str(keyword);
                        output.push_str(" = ");
                        emit_expr(expr, output, context)?;
                        if from_struct {
                            output.push('.');
                            output.push_str(&ident);
                        }
                        output.push(';');
                        context.end_line(output);
                        written = true;
                    }
                    None => {
                        context.error("failed to map semantic name to GLSL keyword", Some(pos))
                    }
                }
            }
            if !written {
                if let Some(semantic) = &return_semantic {
                    match semantic_to_glsl_keyword(semantic, context.target) {
                        Some(keyword) => {
                            context.begin_line(output);
                            output.push_str(keyword);
                            output.push_str(" = ");
                            emit_expr(expr, output, context)?;
                            output.push(';');
                            context.end_line(output);
                            written = true;
                        }
                        None => context.error(
                            "failed to map output semantic to GLSL keyword",
                            Some(entry_pos),
                        ),
                    }
                }
            }
        }
        None => {
            for var_id in sv_refs {
                let variable = context.program.variable(var_id);
                let Some(semantic) = variable.semantic.clone() else {
                    continue;
                };
                let ident = variable.ident.clone();
                if let Some(keyword) = semantic_to_glsl_keyword(&semantic, context.target) {
                    context.write_line(output, &format!("{} = {};", keyword, ident));
                    written = true;
                }
            }
        }
    }

    if !written && context.target != ShaderTarget::Compute {
        context.error("missing output semantic", expr.map(|e| e.pos));
    }
    Ok(())
}

/* --- Declarations --- */

fn emit_function_decl(
    id: FunctionId,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    let function = context.program.function(id);

    if !function.reachable {
        if function.has_non_return_control_path {
            let message = format!(
                "not all control paths in unreferenced function \"{}\" return a value",
                function.ident
            );
            let pos = function.pos;
            context.warning(message, Some(pos));
        }
        return Ok(());
    }

    if function.has_non_return_control_path {
        return Err(GenerateError::NonReturnControlPath(function.ident.clone()));
    }

    context.line_mark(output, function.pos);

    context.begin_line(output);
    if function.is_entry_point {
        output.push_str("void main()");
    } else {
        write_type_denoter(&function.return_type, function.pos, output, context)?;
        let function = context.program.function(id);
        output.push(' ');
        output.push_str(&function.ident);
        output.push('(');
        for (i, param) in function.params.iter().enumerate() {
            if i != 0 {
                output.push_str(", ");
            }
            emit_parameter(param, output, context)?;
        }
        let function = context.program.function(id);
        output.push(')');
        if function.body.is_none() {
            // A function without a body is a forward declaration
            output.push(';');
        }
    }
    context.end_line(output);

    let function = context.program.function(id);
    if let Some(body) = &function.body {
        if function.is_entry_point {
            context.open_scope(output);
            write_local_input_semantics(output, context)?;
            write_local_output_semantics(output, context)?;

            context.inside_entry_point = true;
            for stmt in body {
                emit_stmt(stmt, output, context)?;
            }
            context.inside_entry_point = false;

            // Fall-through end of the entry point still flushes the outputs
            let ends_with_return = matches!(
                body.last(),
                Some(Stmt {
                    kind: StmtKind::Return { .. },
                    ..
                })
            );
            if !ends_with_return {
                write_output_semantics_assignment(None, output, context)?;
            }
            context.close_scope(output, false);
        } else {
            context.open_scope(output);
            for stmt in body {
                emit_stmt(stmt, output, context)?;
            }
            context.close_scope(output, false);
        }
    }

    context.blank(output);
    Ok(())
}

fn emit_parameter(
    param: &VarDeclStmt,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    if let Some(modifier) = param.input_modifier {
        let keyword = match modifier {
            InputModifier::In => "in ",
            InputModifier::Out => "out ",
            InputModifier::InOut => "inout ",
        };
        output.push_str(keyword);
    }
    if param.is_const {
        output.push_str("const ");
    }

    write_type_denoter(&param.var_type, param.pos, output, context)?;
    output.push(' ');

    if param.vars.len() == 1 {
        emit_var_decl(param.vars[0], output, context)?;
    } else {
        context.error(
            "invalid number of variables in function parameter",
            Some(param.pos),
        );
    }
    Ok(())
}

/// Emit a root structure declaration statement
fn emit_struct_decl_stmt(
    id: ast::StructId,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    let structure = context.program.structure(id);
    if !structure.reachable || structure.must_resolve {
        return Ok(());
    }

    context.line_mark(output, structure.pos);

    // Nested structures are written first, in child-to-parent order
    if !structure.is_nested {
        let nested = structure.nested_structs.clone();
        for nested_id in nested.iter().rev() {
            emit_struct_decl(*nested_id, true, true, output, context)?;
            context.blank(output);
        }
    }

    emit_struct_decl(id, true, false, output, context)?;
    context.blank(output);
    Ok(())
}

/// Emit a structure declaration or an interface block
///
/// `terminate` writes the trailing `;` after the closing brace;
/// `allow_nested` permits emitting a nested structure in this context.
fn emit_struct_decl(
    id: ast::StructId,
    terminate: bool,
    allow_nested: bool,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    let structure = context.program.structure(id);
    if structure.must_resolve {
        return Ok(());
    }

    if !structure.is_nested || allow_nested {
        if structure.is_shader_input || structure.is_shader_output {
            // Stage boundary structs are interface blocks, not structs
            context.begin_line(output);
            output.push_str(if structure.is_shader_input { "in " } else { "out " });
            output.push_str(&structure.ident);
            context.end_line(output);

            context.open_scope(output);
            context.inside_interface_block = true;
            let members = context.program.structure(id).members.clone();
            for member in &members {
                emit_var_decl_stmt(member, output, context)?;
            }
            context.inside_interface_block = false;
            context.close_scope(output, false);

            let alias = &context.program.structure(id).alias_name;
            context.write_line(output, &format!("{};", alias));
        } else {
            context.begin_line(output);
            output.push_str("struct");
            if !structure.ident.is_empty() {
                output.push(' ');
                output.push_str(&structure.ident);
            }
            context.end_line(output);

            context.open_scope(output);
            emit_struct_members(id, output, context)?;
            context.close_scope(output, terminate);
        }
    } else if !terminate {
        // Nested struct at its use site: reference it by name only, the
        // declarator names continue on this line
        context.begin_line(output);
        output.push_str(&structure.ident);
        output.push(' ');
    }
    Ok(())
}

/// Emit struct members, inlining the base structure's members first
fn emit_struct_members(
    id: ast::StructId,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    let structure = context.program.structure(id);
    if let Some(base) = structure.base_struct {
        emit_struct_members(base, output, context)?;
    }
    let members = context.program.structure(id).members.clone();
    for member in &members {
        emit_var_decl_stmt(member, output, context)?;
    }
    Ok(())
}

fn emit_uniform_buffer(
    id: ast::BufferId,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    let buffer = context.program.uniform_buffer(id);
    if !buffer.reachable {
        return Ok(());
    }

    let pos = buffer.pos;
    context.line_mark(output, pos);

    context.begin_line(output);
    output.push_str("layout(std140");
    if let Some(register) =
        Register::get_for_target(&buffer.slot_registers, context.target).cloned()
    {
        if let Some(slot) = register_index(&register, 'b', pos, context) {
            write!(output, ", binding = {}", slot).unwrap();
        }
    }
    output.push_str(") uniform ");
    output.push_str(&context.program.uniform_buffer(id).ident);
    context.end_line(output);

    context.open_scope(output);
    let members = context.program.uniform_buffer(id).members.clone();
    for member in &members {
        emit_var_decl_stmt(member, output, context)?;
    }
    context.close_scope(output, true);

    context.blank(output);
    Ok(())
}

fn emit_texture_decl(
    id: ast::TextureId,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    let stmt = context.program.texture_decl(id);
    if !stmt.reachable {
        return Ok(());
    }

    context.line_mark(output, stmt.pos);

    let kind = stmt.texture_kind;
    let Some(sampler) = texture_kind_to_glsl_keyword(kind) else {
        let pos = stmt.pos;
        context.error("failed to map texture type to GLSL sampler type", Some(pos));
        return Ok(());
    };

    let decls = stmt.decls.clone();
    for decl in &decls {
        if !decl.reachable {
            continue;
        }

        context.begin_line(output);

        let mut binding = None;
        if let Some(register) = Register::get_for_target(&decl.slot_registers, context.target) {
            let expected = if kind.is_rw() { 'u' } else { 't' };
            if let Some(slot) = register_index(register, expected, decl.pos, context) {
                write!(output, "layout(binding = {}) ", slot).unwrap();
                binding = Some(slot);
            }
        }

        write!(output, "uniform {} {};", sampler, decl.ident).unwrap();
        context.end_line(output);

        context.statistics.textures.push(TextureBinding {
            ident: decl.ident.clone(),
            binding,
        });
    }

    context.blank(output);
    Ok(())
}

/// Extract the slot index of a register after validating its kind prefix
fn register_index(
    register: &Register,
    expected: char,
    pos: SourcePosition,
    context: &mut Context,
) -> Option<u32> {
    let mut chars = register.name.chars();
    match chars.next() {
        Some(prefix) if prefix == expected => match chars.as_str().parse::<u32>() {
            Ok(slot) => Some(slot),
            Err(_) => {
                context.error(
                    format!("invalid register index in \"{}\"", register.name),
                    Some(pos),
                );
                None
            }
        },
        Some(prefix) => {
            context.error(
                format!(
                    "invalid register prefix '{}' (expected '{}')",
                    prefix, expected
                ),
                Some(pos),
            );
            None
        }
        None => {
            context.error("invalid register prefix '' (expected non-empty)", Some(pos));
            None
        }
    }
}

fn emit_var_decl_stmt(
    stmt: &VarDeclStmt,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    // Filter out declarators that produce no code: disabled ones, ones that
    // reachability suppressed, and system values inside interface blocks
    let vars: Vec<VarId> = stmt
        .vars
        .iter()
        .copied()
        .filter(|&id| {
            let variable = context.program.variable(id);
            if variable.disable_code_gen || !variable.reachable {
                return false;
            }
            if context.inside_interface_block
                && matches!(&variable.semantic, Some(s) if s.is_system_value())
            {
                return false;
            }
            true
        })
        .collect();

    if vars.is_empty() {
        return Ok(());
    }

    context.begin_line(output);

    if stmt.is_shader_input {
        output.push_str("in ");
    } else if stmt.is_shader_output {
        output.push_str("out ");
    }

    for storage_class in &stmt.storage_classes {
        match storage_class_to_glsl_keyword(*storage_class) {
            Some(keyword) => {
                output.push_str(keyword);
                output.push(' ');
            }
            None => context.error(
                "not all storage classes can be mapped to GLSL keywords",
                Some(stmt.pos),
            ),
        }
    }

    if stmt.is_const {
        output.push_str("const ");
    }

    if let Some(struct_id) = stmt.struct_decl {
        // Inline structure definition as the declared type
        let structure = context.program.structure(struct_id);
        output.push_str("struct");
        if !structure.ident.is_empty() {
            output.push(' ');
            output.push_str(&structure.ident);
        }
        context.end_line(output);
        context.open_scope(output);
        emit_struct_members(struct_id, output, context)?;
        context.close_scope(output, false);
        context.begin_line(output);
    } else {
        write_type_denoter(&stmt.var_type, stmt.pos, output, context)?;
        output.push(' ');
    }

    for (i, var_id) in vars.iter().enumerate() {
        if i != 0 {
            output.push_str(", ");
        }
        emit_var_decl(*var_id, output, context)?;
    }

    output.push(';');
    context.end_line(output);
    Ok(())
}

fn emit_var_decl(
    id: VarId,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    let variable = context.program.variable(id);
    output.push_str(&variable.ident);

    let dims = variable.array_dims.clone();
    write_array_indices(&dims, output, context)?;

    let initializer = context.program.variable(id).initializer.clone();
    if let Some(init) = initializer {
        output.push_str(" = ");
        emit_expr(&init, output, context)?;
    }
    Ok(())
}

/* --- Statements --- */

fn emit_stmt(stmt: &Stmt, output: &mut String, context: &mut Context) -> Result<(), GenerateError> {
    context.line_mark(output, stmt.pos);

    match &stmt.kind {
        StmtKind::Null => context.write_line(output, ";"),
        StmtKind::Block(stmts) => {
            context.open_scope(output);
            for stmt in stmts {
                emit_stmt(stmt, output, context)?;
            }
            context.close_scope(output, false);
        }
        StmtKind::VarDecl(decl) => emit_var_decl_stmt(decl, output, context)?,
        StmtKind::Expr(expr) => {
            context.begin_line(output);
            emit_expr(expr, output, context)?;
            output.push(';');
            context.end_line(output);
        }
        StmtKind::If {
            condition,
            body,
            else_branch,
        } => emit_if(condition, body, else_branch.as_deref(), false, output, context)?,
        StmtKind::For {
            init,
            condition,
            iteration,
            body,
        } => {
            context.begin_line(output);
            output.push_str("for (");

            // Re-emit the header statements inline; the init statement
            // provides its own ';'
            context.push_options(LineOptions {
                enable_new_line: false,
                enable_indent: false,
            });
            emit_stmt(init, output, context)?;
            output.push(' ');
            if let Some(condition) = condition {
                emit_expr(condition, output, context)?;
            }
            output.push_str("; ");
            if let Some(iteration) = iteration {
                emit_expr(iteration, output, context)?;
            }
            context.pop_options();

            output.push(')');
            context.end_line(output);

            emit_scoped_stmt(body, output, context)?;
        }
        StmtKind::While { condition, body } => {
            context.begin_line(output);
            output.push_str("while (");
            emit_expr(condition, output, context)?;
            output.push(')');
            context.end_line(output);

            emit_scoped_stmt(body, output, context)?;
        }
        StmtKind::DoWhile { body, condition } => {
            context.write_line(output, "do");
            emit_scoped_stmt(body, output, context)?;

            context.begin_line(output);
            output.push_str("while (");
            emit_expr(condition, output, context)?;
            output.push_str(");");
            context.end_line(output);
        }
        StmtKind::Switch { selector, cases } => {
            context.begin_line(output);
            output.push_str("switch (");
            emit_expr(selector, output, context)?;
            output.push(')');
            context.end_line(output);

            context.open_scope(output);
            for case in cases {
                emit_switch_case(case, output, context)?;
            }
            context.close_scope(output, false);
        }
        StmtKind::Return {
            expr,
            is_end_of_function,
        } => {
            if context.inside_entry_point {
                write_output_semantics_assignment(expr.as_ref(), output, context)?;
                if !is_end_of_function {
                    context.write_line(output, "return;");
                }
            } else if let Some(expr) = expr {
                context.begin_line(output);
                output.push_str("return ");
                emit_expr(expr, output, context)?;
                output.push(';');
                context.end_line(output);
            } else if !is_end_of_function {
                context.write_line(output, "return;");
            }
        }
        StmtKind::CtrlTransfer(transfer) => {
            let keyword = match transfer {
                CtrlTransfer::Break => "break;",
                CtrlTransfer::Continue => "continue;",
                CtrlTransfer::Discard => "discard;",
            };
            context.write_line(output, keyword);
        }
    }
    Ok(())
}

/// Emit an `if` statement; `as_else_branch` continues an `else ` prefix on
/// the current line
fn emit_if(
    condition: &Expr,
    body: &Stmt,
    else_branch: Option<&Stmt>,
    as_else_branch: bool,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    if !as_else_branch {
        context.begin_line(output);
    }
    output.push_str("if (");
    emit_expr(condition, output, context)?;
    output.push(')');
    context.end_line(output);

    emit_scoped_stmt(body, output, context)?;

    if let Some(else_stmt) = else_branch {
        if let StmtKind::If {
            condition,
            body,
            else_branch,
        } = &else_stmt.kind
        {
            // `else if` continues on the same line
            context.begin_line(output);
            output.push_str("else ");
            emit_if(condition, body, else_branch.as_deref(), true, output, context)?;
        } else {
            context.write_line(output, "else");
            emit_scoped_stmt(else_stmt, output, context)?;
        }
    }
    Ok(())
}

fn emit_switch_case(
    case: &SwitchCase,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    match &case.value {
        Some(value) => {
            context.begin_line(output);
            output.push_str("case ");
            emit_expr(value, output, context)?;
            output.push(':');
            context.end_line(output);
        }
        None => context.write_line(output, "default:"),
    }

    context.indent += 1;
    for stmt in &case.stmts {
        emit_stmt(stmt, output, context)?;
    }
    context.indent -= 1;
    Ok(())
}

/// Indent a single-statement body; blocks brace themselves
fn emit_scoped_stmt(
    stmt: &Stmt,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    if matches!(stmt.kind, StmtKind::Block(_)) {
        emit_stmt(stmt, output, context)
    } else {
        context.indent += 1;
        let result = emit_stmt(stmt, output, context);
        context.indent -= 1;
        result
    }
}

/* --- Expressions --- */

fn emit_expr(expr: &Expr, output: &mut String, context: &mut Context) -> Result<(), GenerateError> {
    match &expr.kind {
        ExprKind::Literal(literal) => write_literal(literal, output),
        ExprKind::TypeName(ty) => write_type_denoter(ty, expr.pos, output, context)?,
        ExprKind::Ternary {
            condition,
            then_expr,
            else_expr,
        } => {
            emit_expr(condition, output, context)?;
            output.push_str(" ? ");
            emit_expr(then_expr, output, context)?;
            output.push_str(" : ");
            emit_expr(else_expr, output, context)?;
        }
        ExprKind::Binary { op, lhs, rhs } => {
            emit_expr(lhs, output, context)?;
            output.push(' ');
            output.push_str(bin_op_to_str(*op));
            output.push(' ');
            emit_expr(rhs, output, context)?;
        }
        ExprKind::Unary { op, expr } => {
            output.push_str(unary_op_to_str(*op));
            emit_expr(expr, output, context)?;
        }
        ExprKind::PostUnary { op, expr } => {
            emit_expr(expr, output, context)?;
            output.push_str(unary_op_to_str(*op));
        }
        ExprKind::Call(call) => emit_function_call(call, expr.pos, output, context)?,
        ExprKind::Bracket(inner) => {
            output.push('(');
            emit_expr(inner, output, context)?;
            output.push(')');
        }
        ExprKind::Suffix { expr: inner, ident } => {
            // Scalar swizzles have no GLSL equivalent and are wrapped in
            // vector constructors, e.g. "1.0.xxxx" -> "vec4(1.0)"
            let lhs_type = match type_denoter_of(inner, context.program) {
                Some(ty) => ty,
                None => {
                    context.error("failed to resolve expression type", Some(inner.pos));
                    TypeDenoter::Void
                }
            };
            write_suffix_var_ident_begin(&lhs_type, ident, expr.pos, output, context)?;
            emit_expr(inner, output, context)?;
            write_suffix_var_ident_end(&lhs_type, ident, expr.pos, output, context)?;
        }
        ExprKind::ArrayAccess { expr, indices } => {
            emit_expr(expr, output, context)?;
            write_array_indices(indices, output, context)?;
        }
        ExprKind::Cast { ty, expr } => {
            // Casts become constructor calls: TYPE(expr)
            write_type_denoter(ty, expr.pos, output, context)?;
            output.push('(');
            emit_expr(expr, output, context)?;
            output.push(')');
        }
        ExprKind::VarAccess { ident, assign } => {
            write_var_ident(ident, true, output, context)?;
            if let Some((op, value)) = assign {
                output.push(' ');
                output.push_str(assign_op_to_str(*op));
                output.push(' ');
                emit_expr(value, output, context)?;
            }
        }
        ExprKind::InitializerList(exprs) => {
            output.push_str("{ ");
            for (i, expr) in exprs.iter().enumerate() {
                if i != 0 {
                    output.push_str(", ");
                }
                emit_expr(expr, output, context)?;
            }
            output.push_str(" }");
        }
        ExprKind::List { first, next } => {
            emit_expr(first, output, context)?;
            output.push_str(", ");
            emit_expr(next, output, context)?;
        }
    }
    Ok(())
}

fn write_literal(literal: &Literal, output: &mut String) {
    match literal {
        Literal::Bool(true) => output.push_str("true"),
        Literal::Bool(false) => output.push_str("false"),
        Literal::Int(v) => write!(output, "{}", v).unwrap(),
        Literal::UInt(v) => write!(output, "{}u", v).unwrap(),
        Literal::Float(v) if *v == (*v as i64 as f32) && v.abs() < 1e16 => {
            write!(output, "{}.0", *v as i64).unwrap()
        }
        Literal::Float(v) => write!(output, "{}", v).unwrap(),
        Literal::Double(v) if *v == (*v as i64 as f64) && v.abs() < 1e16 => {
            write!(output, "{}.0", *v as i64).unwrap()
        }
        Literal::Double(v) => write!(output, "{}", v).unwrap(),
    }
}

fn write_array_indices(
    indices: &[Expr],
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    for index in indices {
        output.push('[');
        emit_expr(index, output, context)?;
        output.push(']');
    }
    Ok(())
}

/* --- Variable identifiers --- */

/// The identifier to emit for a chain node
///
/// Conversion may rename declarations, so the current declaration
/// identifier always wins over the spelling recorded in the chain.
fn final_ident<'p>(program: &'p ast::Program, ident: &'p VarIdent) -> &'p str {
    match ident.symbol {
        Some(SymbolRef::Variable(id)) => &program.variable(id).ident,
        Some(SymbolRef::Function(id)) => &program.function(id).ident,
        Some(SymbolRef::Struct(id)) => &program.structure(id).ident,
        Some(SymbolRef::UniformBuffer(id)) => &program.uniform_buffer(id).ident,
        Some(SymbolRef::Texture(id, index)) => match program.texture_decl(id).decls.get(index) {
            Some(decl) => &decl.ident,
            None => &ident.ident,
        },
        None => &ident.ident,
    }
}

fn write_var_ident(
    ident: &VarIdent,
    recursive: bool,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    output.push_str(final_ident(context.program, ident));
    write_array_indices(&ident.array_indices, output, context)?;

    if recursive {
        if let Some(next) = &ident.next {
            output.push('.');
            write_var_ident(next, true, output, context)?;
        }
    }
    Ok(())
}

/// The type a suffix chain node leaves behind for the node after it
fn suffix_type_denoter(
    lhs_type: &TypeDenoter,
    node: &VarIdent,
    context: &mut Context,
) -> TypeDenoter {
    if let Some(data_type) = lhs_type.base_data_type() {
        match subscript_data_type(data_type, &node.ident) {
            Some(subscript) => TypeDenoter::Base(subscript),
            None => {
                context.error(
                    format!("invalid subscript \"{}\" for data type", node.ident),
                    None,
                );
                TypeDenoter::Void
            }
        }
    } else {
        match node.symbol {
            Some(SymbolRef::Variable(id)) => context.program.variable(id).ty.clone(),
            _ => TypeDenoter::Void,
        }
    }
}

/// Open the vector constructors for scalar swizzles, innermost last
fn write_suffix_var_ident_begin(
    lhs_type: &TypeDenoter,
    node: &VarIdent,
    pos: SourcePosition,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    if let Some(next) = &node.next {
        let next_type = suffix_type_denoter(lhs_type, node, context);
        write_suffix_var_ident_begin(&next_type, next, pos, output, context)?;
    }

    if lhs_type.is_scalar() {
        if let Some(data_type) = lhs_type.base_data_type() {
            if let Some(subscript) = subscript_data_type(data_type, &node.ident) {
                write_data_type(subscript, pos, output, context)?;
                output.push('(');
            }
        }
    }
    Ok(())
}

/// Close the constructors opened by [write_suffix_var_ident_begin] and
/// write the remaining member accesses
fn write_suffix_var_ident_end(
    lhs_type: &TypeDenoter,
    node: &VarIdent,
    pos: SourcePosition,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    if lhs_type.is_scalar() {
        output.push(')');
    } else {
        output.push('.');
        write_var_ident(node, false, output, context)?;
    }

    if let Some(next) = &node.next {
        let next_type = suffix_type_denoter(lhs_type, node, context);
        write_suffix_var_ident_end(&next_type, next, pos, output, context)?;
    }
    Ok(())
}

/// Result type of a swizzle applied to a scalar or vector
///
/// Matrix subscripts have no structural GLSL equivalent and return `None`.
fn subscript_data_type(data_type: DataType, subscript: &str) -> Option<DataType> {
    let scalar = data_type.scalar_type();
    match data_type {
        DataType::Matrix(..) => None,
        _ => {
            let width = subscript.len().clamp(1, 4) as u32;
            if width == 1 {
                Some(DataType::Scalar(scalar))
            } else {
                Some(DataType::Vector(scalar, width))
            }
        }
    }
}

/* --- Function calls --- */

fn emit_function_call(
    call: &FunctionCall,
    pos: SourcePosition,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    match call.intrinsic {
        Some(Intrinsic::Mul) => write_call_intrinsic_mul(call, output, context),
        Some(Intrinsic::Rcp) => write_call_intrinsic_rcp(call, output, context),
        Some(intrinsic) if intrinsic.is_interlocked() => {
            write_call_intrinsic_atomic(call, intrinsic, output, context)
        }
        _ => write_call_standard(call, pos, output, context),
    }
}

fn write_call_standard(
    call: &FunctionCall,
    pos: SourcePosition,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    if let Some(intrinsic) = call.intrinsic {
        match intrinsic_to_glsl_keyword(intrinsic) {
            Some(keyword) => output.push_str(keyword),
            None => {
                let name = match &call.ident {
                    Some(ident) => ident.last().ident.clone(),
                    None => format!("{:?}", intrinsic),
                };
                context.error(
                    format!("failed to map intrinsic \"{}\" to GLSL keyword", name),
                    Some(pos),
                );
            }
        }
    } else if let Some(ident) = &call.ident {
        write_var_ident(ident, true, output, context)?;
    } else if let Some(ty) = &call.type_ctor {
        write_type_denoter(ty, pos, output, context)?;
    } else {
        context.error("missing function name", Some(pos));
    }

    output.push('(');
    for (i, arg) in call.args.iter().enumerate() {
        if i != 0 {
            output.push_str(", ");
        }
        emit_expr(arg, output, context)?;
    }
    output.push(')');
    Ok(())
}

/// `mul(A, B)` lowers to `(A * B)`
///
/// An argument that is itself a ternary, binary, unary, or post-unary
/// expression gets its own parentheses, since `*` binds tighter than the
/// argument boundary did.
fn write_call_intrinsic_mul(
    call: &FunctionCall,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    if call.args.len() != 2 {
        return Err(GenerateError::InvalidIntrinsicArgs("mul"));
    }

    output.push('(');
    write_mul_argument(&call.args[0], output, context)?;
    output.push_str(" * ");
    write_mul_argument(&call.args[1], output, context)?;
    output.push(')');
    Ok(())
}

fn write_mul_argument(
    expr: &Expr,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    let needs_brackets = matches!(
        expr.kind,
        ExprKind::Ternary { .. }
            | ExprKind::Binary { .. }
            | ExprKind::Unary { .. }
            | ExprKind::PostUnary { .. }
    );
    if needs_brackets {
        output.push('(');
        emit_expr(expr, output, context)?;
        output.push(')');
    } else {
        emit_expr(expr, output, context)?;
    }
    Ok(())
}

/// `rcp(x)` lowers to `(TYPE(1) / (x))`
fn write_call_intrinsic_rcp(
    call: &FunctionCall,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    if call.args.len() != 1 {
        return Err(GenerateError::InvalidIntrinsicArgs("rcp"));
    }

    let arg = &call.args[0];
    match type_denoter_of(arg, context.program) {
        Some(ty) if ty.is_base() => {
            output.push('(');
            write_type_denoter(&ty, arg.pos, output, context)?;
            output.push_str("(1) / (");
            emit_expr(arg, output, context)?;
            output.push_str("))");
        }
        _ => {
            context.error("invalid argument type for intrinsic \"rcp\"", Some(arg.pos));
        }
    }
    Ok(())
}

/// `InterlockedX(dest, value[, original])` lowers to
/// `[original = ] atomicX(dest, value)`
fn write_call_intrinsic_atomic(
    call: &FunctionCall,
    intrinsic: Intrinsic,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    if call.args.len() < 2 || call.args.len() > 3 {
        return Err(GenerateError::InvalidIntrinsicArgs("interlocked atomic"));
    }

    if call.args.len() == 3 {
        emit_expr(&call.args[2], output, context)?;
        output.push_str(" = ");
    }

    // All interlocked intrinsics have a GLSL atomic keyword
    if let Some(keyword) = intrinsic_to_glsl_keyword(intrinsic) {
        output.push_str(keyword);
    }
    output.push('(');
    emit_expr(&call.args[0], output, context)?;
    output.push_str(", ");
    emit_expr(&call.args[1], output, context)?;
    output.push(')');
    Ok(())
}

/* --- Type denoters --- */

fn write_data_type(
    mut data_type: DataType,
    pos: SourcePosition,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    // Doubles are demoted to floats when the target cannot express them
    if context.version.number() < 400 {
        data_type = data_type.demote_double();
    }

    match data_type_to_glsl_keyword(data_type) {
        Some(keyword) => output.push_str(&keyword),
        None => context.error("failed to map data type to GLSL keyword", Some(pos)),
    }
    Ok(())
}

fn write_type_denoter(
    ty: &TypeDenoter,
    pos: SourcePosition,
    output: &mut String,
    context: &mut Context,
) -> Result<(), GenerateError> {
    match ty {
        TypeDenoter::Void => output.push_str("void"),
        TypeDenoter::Base(data_type) => write_data_type(*data_type, pos, output, context)?,
        TypeDenoter::Texture { kind, .. } => match texture_kind_to_glsl_keyword(*kind) {
            Some(keyword) => output.push_str(keyword),
            None => context.error("failed to map texture type to GLSL keyword", Some(pos)),
        },
        TypeDenoter::Struct { ident, struct_ref } => {
            // Conversion may have renamed the struct; resolve through the
            // back-reference
            match struct_ref {
                Some(id) => output.push_str(&context.program.structure(*id).ident),
                None => output.push_str(ident),
            }
        }
        TypeDenoter::Alias { target, .. } => write_type_denoter(target, pos, output, context)?,
        TypeDenoter::Array { base, dims } => {
            write_type_denoter(base, pos, output, context)?;
            write_array_indices(dims, output, context)?;
        }
    }
    Ok(())
}

/* --- Type resolution --- */

/// Best-effort type of an expression, following symbol back-references
///
/// The front end guarantees resolvable types on the paths the generator
/// needs (suffix swizzles, `rcp` arguments); anything else returns `None`.
fn type_denoter_of(expr: &Expr, program: &ast::Program) -> Option<TypeDenoter> {
    match &expr.kind {
        ExprKind::Literal(literal) => {
            let scalar = match literal {
                Literal::Bool(_) => ScalarType::Bool,
                Literal::Int(_) => ScalarType::Int,
                Literal::UInt(_) => ScalarType::UInt,
                Literal::Float(_) => ScalarType::Float,
                Literal::Double(_) => ScalarType::Double,
            };
            Some(TypeDenoter::Base(DataType::Scalar(scalar)))
        }
        ExprKind::TypeName(ty) => Some(ty.clone()),
        ExprKind::Cast { ty, .. } => Some(ty.clone()),
        ExprKind::Bracket(inner) => type_denoter_of(inner, program),
        ExprKind::Binary { lhs, .. } => type_denoter_of(lhs, program),
        ExprKind::Unary { expr, .. } | ExprKind::PostUnary { expr, .. } => {
            type_denoter_of(expr, program)
        }
        ExprKind::Ternary { then_expr, .. } => type_denoter_of(then_expr, program),
        ExprKind::VarAccess { ident, .. } => var_ident_type(ident, program),
        ExprKind::Suffix { expr, ident } => {
            let mut ty = type_denoter_of(expr, program)?;
            let mut node = Some(ident);
            while let Some(current) = node {
                ty = suffix_node_type(&ty, current, program)?;
                node = current.next.as_deref();
            }
            Some(ty)
        }
        ExprKind::Call(call) => {
            if let Some(ty) = &call.type_ctor {
                return Some(ty.clone());
            }
            match call.ident.as_ref()?.symbol {
                Some(SymbolRef::Function(id)) => Some(program.function(id).return_type.clone()),
                _ => None,
            }
        }
        ExprKind::ArrayAccess { expr, indices } => {
            let mut ty = type_denoter_of(expr, program)?;
            for _ in indices {
                ty = match ty.get_aliased() {
                    TypeDenoter::Array { base, .. } => (**base).clone(),
                    other => other.clone(),
                };
            }
            Some(ty)
        }
        ExprKind::InitializerList(_) | ExprKind::List { .. } => None,
    }
}

/// The type left after resolving one chain node of a variable access
fn var_ident_type(ident: &VarIdent, program: &ast::Program) -> Option<TypeDenoter> {
    let mut ty = match ident.symbol {
        Some(SymbolRef::Variable(id)) => program.variable(id).ty.clone(),
        _ => return None,
    };

    for _ in &ident.array_indices {
        ty = match ty.get_aliased() {
            TypeDenoter::Array { base, .. } => (**base).clone(),
            other => other.clone(),
        };
    }

    match &ident.next {
        None => Some(ty),
        Some(next) => match next.symbol {
            Some(SymbolRef::Variable(_)) => var_ident_type(next, program),
            _ => {
                let mut current = Some(next.as_ref());
                while let Some(node) = current {
                    ty = suffix_node_type(&ty, node, program)?;
                    current = node.next.as_deref();
                }
                Some(ty)
            }
        },
    }
}

fn suffix_node_type(
    lhs_type: &TypeDenoter,
    node: &VarIdent,
    program: &ast::Program,
) -> Option<TypeDenoter> {
    if let Some(data_type) = lhs_type.base_data_type() {
        subscript_data_type(data_type, &node.ident).map(TypeDenoter::Base)
    } else {
        match node.symbol {
            Some(SymbolRef::Variable(id)) => Some(program.variable(id).ty.clone()),
            _ => None,
        }
    }
}

/* --- Operators --- */

fn bin_op_to_str(op: BinOp) -> &'static str {
    use BinOp::*;
    match op {
        Add => "+",
        Subtract => "-",
        Multiply => "*",
        Divide => "/",
        Modulus => "%",
        LeftShift => "<<",
        RightShift => ">>",
        BitwiseAnd => "&",
        BitwiseOr => "|",
        BitwiseXor => "^",
        BooleanAnd => "&&",
        BooleanOr => "||",
        LessThan => "<",
        LessEqual => "<=",
        GreaterThan => ">",
        GreaterEqual => ">=",
        Equality => "==",
        Inequality => "!=",
    }
}

fn unary_op_to_str(op: UnaryOp) -> &'static str {
    use UnaryOp::*;
    match op {
        Plus => "+",
        Minus => "-",
        LogicalNot => "!",
        BitwiseNot => "~",
        Increment => "++",
        Decrement => "--",
    }
}

fn assign_op_to_str(op: AssignOp) -> &'static str {
    use AssignOp::*;
    match op {
        Assign => "=",
        SumAssign => "+=",
        DifferenceAssign => "-=",
        ProductAssign => "*=",
        QuotientAssign => "/=",
        RemainderAssign => "%=",
        LeftShiftAssign => "<<=",
        RightShiftAssign => ">>=",
        BitwiseAndAssign => "&=",
        BitwiseOrAssign => "|=",
        BitwiseXorAssign => "^=",
    }
}
