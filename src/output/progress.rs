use std::io::{self, Stdout, Write};

/// Prints rows of dots to report the progress of a long-running batch of
/// operations. Construct it with the number of operations (`num_ticks`), how
/// many dots the whole batch should produce, and how many dots fit on one
/// line, then call [`tick`](ProgressPrinter::tick) once per completed
/// operation.
///
/// Output goes to stdout by default; any `io::Write` sink can be substituted
/// with [`with_output`](ProgressPrinter::with_output). Sink failures are
/// discarded: progress dots carry no error contract and must not fail the
/// operation they report on.
pub struct ProgressPrinter<W: Write = Stdout> {
    out: W,
    count: u64,
    num_ticks: u64,
    num_dots: u64,
    dots_per_line: u64,
    dots_printed: u64,
    line_so_far: u64,
    lines_completed: u64,
    segment: f64,
    next_segment: f64,
    prefix: String,
    postfix: String,
}

impl ProgressPrinter<Stdout> {
    pub fn new(num_ticks: u64, num_dots: u64, dots_per_line: u64) -> Self {
        ProgressPrinter::with_output(io::stdout(), num_ticks, num_dots, dots_per_line)
    }
}

impl<W: Write> ProgressPrinter<W> {
    pub fn with_output(out: W, num_ticks: u64, num_dots: u64, dots_per_line: u64) -> Self {
        let mut segment = num_ticks as f64 / num_dots as f64;
        if segment == 0.0 {
            segment = 1.0;
        }

        ProgressPrinter {
            out,
            count: 0,
            num_ticks,
            num_dots,
            dots_per_line,
            dots_printed: 0,
            line_so_far: 0,
            lines_completed: 0,
            next_segment: segment,
            segment,
            prefix: String::new(),
            postfix: String::new(),
        }
    }

    /// A string printed before every line of dots.
    pub fn prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// A string printed after every line of dots.
    pub fn postfix<S: Into<String>>(mut self, postfix: S) -> Self {
        self.postfix = postfix.into();
        self
    }

    /// Records one completed operation, printing a dot each time the
    /// cumulative count crosses the next segment threshold.
    pub fn tick(&mut self) {
        self.count += 1;

        while self.count as f64 >= self.next_segment && self.dots_printed < self.num_dots {
            self.print_dot();
            self.next_segment += self.segment;
        }

        if self.count == self.num_ticks {
            // Accumulated floating-point error can leave the final threshold
            // just above the last tick; the closing dot still has to appear.
            if self.dots_printed < self.num_dots {
                self.print_dot();
            }
            if self.line_so_far > 0 {
                self.finish_line();
            }
        }
    }

    pub fn dots_printed(&self) -> u64 {
        self.dots_printed
    }

    pub fn lines_completed(&self) -> u64 {
        self.lines_completed
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_dot(&mut self) {
        if self.line_so_far == 0 {
            let _ = write!(self.out, "{}", self.prefix);
        }

        let _ = write!(self.out, ".");
        let _ = self.out.flush();

        self.line_so_far += 1;
        self.dots_printed += 1;

        if self.line_so_far == self.dots_per_line {
            self.finish_line();
        }
    }

    fn finish_line(&mut self) {
        let _ = writeln!(self.out, "{}", self.postfix);
        let _ = self.out.flush();

        self.line_so_far = 0;
        self.lines_completed += 1;
    }
}
