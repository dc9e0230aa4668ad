// dotgraph command-line front-end
// Usage: dotgraph [--verbose] check <path> | inspect <file> [--json]

fn main() {
    dotgraph::cli::run();
}
