use std::fmt::{self, Display, Write};

use crate::{
    Access, AssignValue, Attributes, AttrValue, BundleDef, Command, Constraint, Delay, Expr,
    ExprKind, Fact, FactKind, IfStmt, IntervalRange, Item, LetValue, OrderConstraint, Port,
    PortDef, SigBind, Signature, SourceFile, StrLit, Time, TimeKind,
};

macro_rules! wln {
    ($dst:expr) => {
        { let _ = writeln!($dst); }
    };
    ($dst:expr, $($arg:tt)*) => {
        { let _ = writeln!($dst, $($arg)*); }
    };
}

macro_rules! w {
    ($dst:expr, $($arg:tt)*) => {
        { let _ = write!($dst, $($arg)*); }
    };
}

impl SourceFile {
    /// Renders the tree as canonical source text.
    ///
    /// Parsing the output again yields the same tree (up to spans).
    pub fn dump(&self) -> String {
        let mut printer = Printer { buf: String::new(), indent_level: 0, needs_indent: true };
        printer.print_file(self);
        printer.buf
    }
}

struct Printer {
    buf: String,
    indent_level: usize,
    needs_indent: bool,
}

impl Printer {
    fn indented(&mut self, f: impl FnOnce(&mut Self)) {
        self.indent_level += 1;
        wln!(self);
        f(self);
        self.indent_level -= 1;
        self.buf = self.buf.trim_end_matches('\n').to_string();
    }

    fn print_file(&mut self, file: &SourceFile) {
        for import in &file.imports {
            wln!(self, "import {};", import.path);
        }
        if !file.imports.is_empty() && !file.items.is_empty() {
            wln!(self);
        }

        for (i, item) in file.items.iter().enumerate() {
            if i != 0 {
                wln!(self);
            }
            self.print_item(item);
        }
    }

    fn print_item(&mut self, item: &Item) {
        match item {
            Item::Component(comp) => {
                self.print_signature(&comp.sig);
                w!(self, " ");
                self.print_block(&comp.body);
                wln!(self);
            }
            Item::External(ext) => {
                w!(self, "extern {} {{", ext.path);
                self.indented(|s| s.print_signatures(&ext.sigs));
                wln!(self, "}}");
            }
            Item::Generate(gen) => {
                w!(self, "generate ({}) using {} {{", gen.tool, gen.using);
                self.indented(|s| s.print_signatures(&gen.sigs));
                wln!(self, "}}");
            }
        }
    }

    fn print_signatures(&mut self, sigs: &[Signature]) {
        for sig in sigs {
            self.print_signature(sig);
            wln!(self, ";");
        }
    }

    fn print_signature(&mut self, sig: &Signature) {
        if let Some(attrs) = &sig.attrs {
            self.print_attrs(attrs);
            w!(self, " ");
        }
        w!(self, "comp {}", sig.name);
        if let Some(params) = &sig.params {
            w!(self, "[");
            for (i, param) in params.binds.iter().enumerate() {
                self.sep(i, ", ");
                match &param.default {
                    Some(default) => w!(self, "?#{} = {}", param.name, default),
                    None => w!(self, "#{}", param.name),
                }
            }
            w!(self, "]");
        }
        if let Some(events) = &sig.events {
            w!(self, "<");
            for (i, bind) in events.binds.iter().enumerate() {
                self.sep(i, ", ");
                if bind.existential {
                    w!(self, "?");
                }
                w!(self, "'{}: ", bind.event);
                match &bind.delay {
                    Delay::Expr(delay) => w!(self, "{}", delay),
                    Delay::Diff { end, start } => w!(self, "{} - ({})", end, start),
                }
                if let Some(default) = &bind.default {
                    w!(self, " = {}", default);
                }
            }
            w!(self, ">");
        }

        w!(self, "(");
        self.print_port_defs(&sig.io.inputs);
        w!(self, ") -> (");
        self.print_port_defs(&sig.io.outputs);
        w!(self, ")");

        if let Some(bindings) = &sig.bindings {
            w!(self, " with {{");
            for bind in &bindings.binds {
                match bind {
                    SigBind::Let { name, value, .. } => w!(self, " let #{} = {};", name, value),
                    SigBind::Exists { opaque, name, constraints, .. } => {
                        let kw = if *opaque { "opaque" } else { "some" };
                        w!(self, " {} #{}", kw, name);
                        if !constraints.is_empty() {
                            w!(self, " where ");
                            self.print_constraints(constraints);
                        }
                        w!(self, ";");
                    }
                }
            }
            w!(self, " }}");
        }

        if let Some(constraints) = &sig.constraints {
            w!(self, " where ");
            self.print_constraints(&constraints.list);
        }
    }

    fn print_attrs(&mut self, attrs: &Attributes) {
        w!(self, "#[");
        for (i, attr) in attrs.binds.iter().enumerate() {
            self.sep(i, ", ");
            match &attr.value {
                AttrValue::Flag => w!(self, "{}", attr.name),
                AttrValue::Negated => w!(self, "not({})", attr.name),
                AttrValue::Int(val) => w!(self, "{}={}", attr.name, val),
                AttrValue::Float(val) => w!(self, "{}={}", attr.name, val.text),
            }
        }
        w!(self, "]");
    }

    fn print_port_defs(&mut self, ports: &[PortDef]) {
        for (i, port) in ports.iter().enumerate() {
            self.sep(i, ", ");
            match port {
                PortDef::Scalar { name, width, .. } => w!(self, "{}: {}", name, width),
                PortDef::Bundle(bundle) => self.print_bundle_def(bundle),
                PortDef::Interface { name, event, .. } => {
                    w!(self, "{}: interface['{}]", name, event)
                }
            }
        }
    }

    fn print_bundle_def(&mut self, bundle: &BundleDef) {
        if let Some(attrs) = &bundle.attrs {
            self.print_attrs(attrs);
            w!(self, " ");
        }
        w!(self, "{}", bundle.name);
        for dim in &bundle.dims {
            w!(self, "[{}]", dim);
        }
        w!(self, ": ");
        if let Some(params) = &bundle.typ.params {
            w!(self, "for<");
            for (i, param) in params.iter().enumerate() {
                self.sep(i, ", ");
                w!(self, "#{}", param);
            }
            w!(self, "> ");
        }
        w!(self, "{} {}", bundle.typ.liveness, bundle.typ.width);
    }

    fn print_constraints(&mut self, constraints: &[Constraint]) {
        for (i, cons) in constraints.iter().enumerate() {
            self.sep(i, ", ");
            w!(self, "{}", cons);
        }
    }

    fn print_block(&mut self, body: &[Command]) {
        w!(self, "{{");
        self.indented(|s| {
            for cmd in body {
                s.print_command(cmd);
                wln!(s);
            }
        });
        w!(self, "}}");
    }

    fn print_command(&mut self, cmd: &Command) {
        match cmd {
            Command::Bundle(bundle) => {
                w!(self, "bundle ");
                self.print_bundle_def(bundle);
                w!(self, ";");
            }
            Command::Assign(assign) => {
                w!(self, "{} := ", assign.name);
                match &assign.value {
                    AssignValue::Instance(inst) => {
                        w!(self, "new {}", inst.component);
                        if let Some(params) = &inst.params {
                            w!(self, "[");
                            self.print_list(params);
                            w!(self, "]");
                        }
                        if let Some(events) = &inst.events {
                            w!(self, "<");
                            self.print_list(events);
                            w!(self, ">");
                        }
                        if let Some(args) = &inst.args {
                            w!(self, "(");
                            self.print_list(args);
                            w!(self, ")");
                        }
                        if !inst.lives.is_empty() {
                            w!(self, " in ");
                            self.print_list(&inst.lives);
                        }
                    }
                    AssignValue::Invoke(invoke) => {
                        w!(self, "{}<", invoke.component);
                        self.print_list(&invoke.events);
                        w!(self, ">(");
                        self.print_list(&invoke.args);
                        w!(self, ")");
                    }
                    AssignValue::Exists(expr) => w!(self, "{}", expr),
                }
                w!(self, ";");
            }
            Command::Connect(connect) => w!(self, "{} = {};", connect.dst, connect.src),
            Command::ForLoop(for_loop) => {
                w!(self, "for #{} in {}..{} ", for_loop.var, for_loop.start, for_loop.end);
                self.print_block(&for_loop.body);
            }
            Command::If(if_stmt) => self.print_if(if_stmt),
            Command::Fact(Fact { kind, implication, .. }) => {
                let kw = match kind {
                    FactKind::Assume => "assume",
                    FactKind::Assert => "assert",
                };
                w!(self, "{} ", kw);
                if let Some(guard) = &implication.guard {
                    w!(self, "{} => ", guard);
                }
                w!(self, "{};", implication.cons);
            }
            Command::ParamLet(param_let) => match &param_let.value {
                LetValue::Expr(expr) => w!(self, "let #{} = {};", param_let.name, expr),
                LetValue::Hole(_) => w!(self, "let #{} = ?;", param_let.name),
            },
        }
    }

    fn print_if(&mut self, if_stmt: &IfStmt) {
        w!(self, "if {} ", if_stmt.cond);
        self.print_block(&if_stmt.then_branch);
        match if_stmt.else_branch.as_deref() {
            None => (),
            Some([Command::If(else_if)]) => {
                w!(self, " else ");
                self.print_if(else_if);
            }
            Some(else_branch) => {
                w!(self, " else ");
                self.print_block(else_branch);
            }
        }
    }

    fn print_list<T: Display>(&mut self, list: &[T]) {
        for (i, elem) in list.iter().enumerate() {
            self.sep(i, ", ");
            w!(self, "{}", elem);
        }
    }

    fn sep(&mut self, i: usize, sep: &str) {
        if i != 0 {
            w!(self, "{}", sep);
        }
    }
}

impl Write for Printer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for line in s.split_inclusive('\n') {
            if self.needs_indent {
                match self.buf.chars().last() {
                    Some('\n') | None => {}
                    _ => self.buf.push('\n'),
                }

                if line != "\n" {
                    // empty lines stay unindented
                    self.buf.push_str(&"    ".repeat(self.indent_level));
                }
                self.needs_indent = false;
            }

            self.buf.push_str(line);
            self.needs_indent = line.ends_with('\n');
        }

        Ok(())
    }
}

fn comma_separated<T: Display>(f: &mut fmt::Formatter<'_>, list: &[T]) -> fmt::Result {
    for (i, elem) in list.iter().enumerate() {
        if i != 0 {
            f.write_str(", ")?;
        }
        write!(f, "{elem}")?;
    }
    Ok(())
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Binary { op, lhs, rhs } => write!(f, "{lhs} {op} {rhs}"),
            ExprKind::If { cond, then_val, else_val } => {
                write!(f, "if {cond} {{ {then_val} }} else {{ {else_val} }}")
            }
            ExprKind::Call { func, args } => {
                write!(f, "{func}(")?;
                comma_separated(f, args)?;
                f.write_str(")")
            }
            ExprKind::Paren(inner) => write!(f, "({inner})"),
            ExprKind::Literal(lit) => write!(f, "{lit}"),
            ExprKind::Scoped { scope, name } => write!(f, "{scope}::#{name}"),
            ExprKind::Param(name) => write!(f, "#{name}"),
        }
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TimeKind::Event(event) => write!(f, "'{event}"),
            TimeKind::EventPlus(event, offset) => write!(f, "'{event} + {offset}"),
            TimeKind::PlusEvent(offset, event) => write!(f, "{offset} + '{event}"),
            TimeKind::Expr(expr) => write!(f, "{expr}"),
        }
    }
}

impl<T: Display> Display for OrderConstraint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Expr(cons) => Display::fmt(cons, f),
            Constraint::Time(cons) => Display::fmt(cons, f),
        }
    }
}

impl Display for IntervalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(instance) = &self.instance {
            write!(f, "{instance}.")?;
        }
        write!(f, "{}", self.name)?;
        for access in &self.accesses {
            write!(f, "{access}")?;
        }
        Ok(())
    }
}

impl Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.end {
            Some(end) => write!(f, "{{{}..{}}}", self.start, end),
            None => write!(f, "{{{}}}", self.start),
        }
    }
}

impl Display for StrLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.value.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\t' => f.write_str("\\t")?,
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')
    }
}
