mod inlines;
