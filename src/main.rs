fn main() {
    blastline::game::run();
}
